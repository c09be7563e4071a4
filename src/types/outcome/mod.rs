//! Operation-result container with structured errors.
//!
//! [`Outcome`] records whether an operation succeeded, the payload it produced
//! (if any) and every error collected along the way. The success flag is
//! independent of the error list: a successful outcome may carry non-critical
//! errors, and a failed one is expected (but not forced) to carry at least one.
//!
//! - Construction goes through named functions (`success*`, `failure*`) or the
//!   [`OutcomeBuilder`].
//! - Combinators (`if_success*`, `if_failure`, `resolve`, `map_object`) branch
//!   on the success flag so call sites need no explicit `if`.
//! - Callbacks run synchronously, at most once per call. A panicking callback
//!   unwinds through the combinator untouched.
use crate::traits::IntoError;
use crate::types::alloc_type::String;
use crate::types::error_formatter::OutcomeFormatBuilder;
use crate::types::{Cause, Error, ErrorVec, Metadata, OutcomeError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod builder;
mod traits;

pub use builder::OutcomeBuilder;

/// The shared void success: success flag set, no payload, no errors.
///
/// ```
/// use outcome_rail::{Outcome, SUCCESS_VOID};
///
/// assert_eq!(Outcome::success_void(), SUCCESS_VOID);
/// assert_eq!(SUCCESS_VOID, Outcome::success_opt(None));
/// ```
pub const SUCCESS_VOID: Outcome<()> = Outcome::success_void();

/// Success/failure of an operation, an optional payload and its errors.
///
/// Only successful outcomes built through the factory functions carry a
/// payload; failures always start without one. The builder does not enforce
/// this, so a failure with a payload is possible but discouraged.
///
/// Equality and hashing are structural over the success flag, the payload and
/// the error sequence (order and multiplicity included).
///
/// # Type Parameters
///
/// * `T` - The payload type
/// * `E` - The error record type, [`Error`] unless a custom
///   [`GenericError`](crate::GenericError) is used
///
/// # Examples
///
/// ```
/// use outcome_rail::{GenericError, Outcome};
///
/// fn create_account(name: &str) -> Outcome<u64> {
///     if name.is_empty() {
///         return Outcome::failure("name must not be empty");
///     }
///     Outcome::success(7)
/// }
///
/// let id = create_account("ada").resolve(
///     |ok| ok.into_object(),
///     |failed| {
///         assert_eq!(failed.first_error().unwrap().message(), "name must not be empty");
///         None
///     },
/// );
/// assert_eq!(id, Some(7));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome<T, E = Error> {
    pub(crate) success: bool,
    pub(crate) object: Option<T>,
    pub(crate) errors: ErrorVec<E>,
}

impl Outcome<()> {
    /// Void success with no errors.
    ///
    /// Builds the same value as [`SUCCESS_VOID`] without allocating.
    #[inline]
    pub const fn success_void() -> Self {
        Self { success: true, object: None, errors: ErrorVec::new_const() }
    }

    /// Void success with one non-critical error.
    #[inline]
    pub fn success_void_with_message<M: IntoError>(message: M) -> Self {
        Self::success_opt_with_errors(None, [message.into_error()])
    }

    /// Void success with non-critical errors.
    #[inline]
    pub fn success_void_with_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::success_opt_with_errors(None, errors)
    }
}

impl<T> Outcome<T> {
    /// Success wrapping `object`.
    #[inline]
    pub fn success(object: T) -> Self {
        Self { success: true, object: Some(object), errors: ErrorVec::new() }
    }

    /// Success whose payload may be absent.
    ///
    /// `Outcome::<()>::success_opt(None)` equals [`Outcome::success_void`].
    #[inline]
    pub fn success_opt(object: Option<T>) -> Self {
        Self { success: true, object, errors: ErrorVec::new() }
    }

    /// Success wrapping `object` plus non-critical errors.
    #[inline]
    pub fn success_with_errors<I>(object: T, errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::success_opt_with_errors(Some(object), errors)
    }

    /// Success wrapping `object` plus one non-critical error message.
    #[inline]
    pub fn success_with_message<M: IntoError>(object: T, message: M) -> Self {
        Self::success_opt_with_errors(Some(object), [message.into_error()])
    }

    #[inline]
    fn success_opt_with_errors<I>(object: Option<T>, errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self { success: true, object, errors: errors.into_iter().collect() }
    }

    /// Failure with a single error built from `message`.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32> = Outcome::failure("boom");
    /// assert!(failed.is_failure());
    /// assert_eq!(failed.object(), None);
    /// ```
    #[inline]
    pub fn failure<M: IntoError>(message: M) -> Self {
        Self::failure_error(message.into_error())
    }

    /// Failure with one error per message, in order.
    #[inline]
    pub fn failure_messages<M, I>(first: M, rest: I) -> Self
    where
        M: IntoError,
        I: IntoIterator,
        I::Item: IntoError,
    {
        Self::failure_errors(first.into_error(), rest.into_iter().map(IntoError::into_error))
    }

    /// Failure carrying exactly `errors`.
    ///
    /// An empty list is accepted and yields a failure without errors; prefer
    /// [`failure_errors`](Outcome::failure_errors) when at least one error is
    /// known to exist.
    #[inline]
    pub fn failure_with_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self { success: false, object: None, errors: errors.into_iter().collect() }
    }

    /// Failure with a single prebuilt error.
    #[inline]
    pub fn failure_error(error: Error) -> Self {
        Self { success: false, object: None, errors: smallvec::smallvec![error] }
    }

    /// Failure with `first` followed by `rest`, in order.
    pub fn failure_errors<I>(first: Error, rest: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let mut errors = ErrorVec::new();
        errors.push(first);
        errors.extend(rest);
        Self { success: false, object: None, errors }
    }

    /// Failure whose single error wraps `cause` and takes its message from it.
    #[inline]
    pub fn failure_from_cause(cause: impl Into<Cause>) -> Self {
        Self::failure_error(Error::from_cause(cause))
    }

    /// Failure whose single error has `message` and `cause`.
    #[inline]
    pub fn failure_with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::failure_error(Error::with_cause(message, cause))
    }

    /// Failure whose single error has all three parts.
    #[inline]
    pub fn failure_full(
        message: impl Into<String>,
        cause: impl Into<Cause>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self::failure_error(Error::full(message, cause, metadata))
    }

    /// `Ok(v)` becomes `success(v)`, `Err(x)` becomes `failure(x)`.
    #[inline]
    pub fn from_result<X: IntoError>(result: Result<T, X>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Builder with no field set.
    #[inline]
    pub fn builder() -> OutcomeBuilder<T> {
        OutcomeBuilder::new()
    }

    /// Builder with the success flag already set to `true`.
    #[inline]
    pub fn success_builder() -> OutcomeBuilder<T> {
        OutcomeBuilder::new().success(true)
    }

    /// Builder with the success flag already set to `false`.
    #[inline]
    pub fn failure_builder() -> OutcomeBuilder<T> {
        OutcomeBuilder::new().success(false)
    }
}

impl<T, E> Outcome<T, E> {
    /// The operation's success flag. May be `true` while errors are present.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The first error in insertion order.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::EmptyErrorAccess`] when there are no errors.
    #[inline]
    pub fn first_error(&self) -> Result<&E, OutcomeError> {
        self.errors.first().ok_or(OutcomeError::EmptyErrorAccess)
    }

    /// The payload, if any.
    #[inline]
    pub fn object(&self) -> Option<&T> {
        self.object.as_ref()
    }

    /// The payload, required to be present.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::NullReference`] when the payload is absent, whatever the
    /// success flag.
    #[inline]
    pub fn non_null_object(&self) -> Result<&T, OutcomeError> {
        self.object.as_ref().ok_or(OutcomeError::NullReference { what: "object" })
    }

    /// The payload, or `default` when absent.
    #[inline]
    pub fn object_or(self, default: T) -> T {
        self.object.unwrap_or(default)
    }

    /// The payload, or the supplier's value when absent.
    ///
    /// `supplier` is not called when a payload is present.
    #[inline]
    pub fn object_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.object.unwrap_or_else(supplier)
    }

    #[inline]
    pub fn into_object(self) -> Option<T> {
        self.object
    }

    /// The error sequence in insertion order.
    #[inline]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<E> {
        self.errors
    }

    /// Calls `action` once per error, in insertion order.
    #[inline]
    pub fn for_each_error<F>(&self, action: F)
    where
        F: FnMut(&E),
    {
        self.errors.iter().for_each(action);
    }

    /// Splits into `(success, object, errors)`.
    #[inline]
    pub fn into_parts(self) -> (bool, Option<T>, ErrorVec<E>) {
        (self.success, self.object, self.errors)
    }

    /// Calls `action` with this outcome if it is a success.
    #[inline]
    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&Self),
    {
        if self.success {
            action(self);
        }
    }

    /// Replaces a success with the supplier's outcome; a failure is returned
    /// unchanged and the supplier is never called.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut calls = 0;
    /// let out = Outcome::success(1)
    ///     .if_success_then(|| Outcome::failure("x"))
    ///     .if_success_then(|| {
    ///         calls += 1;
    ///         Outcome::success(3)
    ///     });
    ///
    /// assert_eq!(out, Outcome::failure("x"));
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn if_success_then<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.success {
            supplier()
        } else {
            self
        }
    }

    /// Feeds a success into `function`; a failure is returned unchanged.
    #[inline]
    pub fn if_success_apply<F>(self, function: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.success {
            function(self)
        } else {
            self
        }
    }

    /// Feeds a success's payload into `function`; a failure is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::NullReference`] when this is a success without payload.
    #[inline]
    pub fn if_success_use_object<F>(self, function: F) -> Result<Self, OutcomeError>
    where
        F: FnOnce(T) -> Self,
    {
        if !self.success {
            return Ok(self);
        }
        match self.object {
            Some(object) => Ok(function(object)),
            None => Err(OutcomeError::NullReference { what: "object" }),
        }
    }

    /// Calls `action` with this outcome if it is a failure, then returns it
    /// unchanged in both cases.
    #[inline]
    pub fn if_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if !self.success {
            action(&self);
        }
        self
    }

    /// Applies exactly one of the resolvers, chosen by the success flag.
    #[inline]
    pub fn resolve<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(Self) -> U,
        F: FnOnce(Self) -> U,
    {
        if self.success {
            on_success(self)
        } else {
            on_failure(self)
        }
    }

    /// Maps the payload.
    ///
    /// The success flag is not consulted: a failure built with a payload
    /// through the builder is mapped like a success.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::NullReference`] when the payload is absent.
    #[inline]
    pub fn map_object<U, F>(self, mapper: F) -> Result<U, OutcomeError>
    where
        F: FnOnce(T) -> U,
    {
        self.object.map(mapper).ok_or(OutcomeError::NullReference { what: "object" })
    }

    /// Maps the payload if present, keeping the flag and errors.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome { success: self.success, object: self.object.map(f), errors: self.errors }
    }

    /// Maps every error, keeping the flag and payload.
    #[inline]
    pub fn map_errors<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnMut(E) -> G,
    {
        Outcome {
            success: self.success,
            object: self.object,
            errors: self.errors.into_iter().map(f).collect(),
        }
    }

    /// Returns this outcome with `error` appended, flag and payload unchanged.
    #[inline]
    pub fn with_error(mut self, error: E) -> Self {
        self.errors.push(error);
        self
    }

    /// Returns a builder for customizing how this outcome renders.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> OutcomeFormatBuilder<'_, T, E> {
        OutcomeFormatBuilder::new(self)
    }
}
