//! Extension traits lifting standard `Result` and `Option` values into an
//! [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//!
//! let parsed = "42".parse::<u32>().into_outcome_from_cause();
//! assert!(parsed.is_success());
//!
//! let broken = "forty-two".parse::<u32>().into_outcome_from_cause();
//! assert!(broken.is_failure());
//! assert!(broken.first_error().unwrap().cause().is_some());
//! ```

use crate::traits::IntoError;
use crate::types::{Error, Outcome};

/// Extension trait converting a `Result` into an [`Outcome`].
pub trait ResultExt<T, X> {
    /// `Ok(v)` becomes `success(v)`; `Err(x)` becomes a failure carrying
    /// `x.into_error()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    ///
    /// let result: Result<i32, &str> = Err("not found");
    /// let outcome = result.into_outcome();
    /// assert_eq!(outcome.first_error().unwrap().message(), "not found");
    /// ```
    fn into_outcome(self) -> Outcome<T>
    where
        X: IntoError;

    /// `Ok(v)` becomes `success(v)`; `Err(x)` becomes a failure whose error
    /// keeps `x` as its cause and takes its message from `x`'s `Display`.
    fn into_outcome_from_cause(self) -> Outcome<T>
    where
        X: core::error::Error + Send + Sync + 'static;

    /// Like [`into_outcome_from_cause`](ResultExt::into_outcome_from_cause)
    /// with a caller-supplied message, computed only on the error path.
    fn into_outcome_with<F, M>(self, message: F) -> Outcome<T>
    where
        X: core::error::Error + Send + Sync + 'static,
        F: FnOnce() -> M,
        M: Into<crate::types::alloc_type::String>;
}

impl<T, X> ResultExt<T, X> for Result<T, X> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        X: IntoError,
    {
        Outcome::from_result(self)
    }

    #[inline]
    fn into_outcome_from_cause(self) -> Outcome<T>
    where
        X: core::error::Error + Send + Sync + 'static,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(cause) => Outcome::failure_error(Error::from_cause(cause)),
        }
    }

    #[inline]
    fn into_outcome_with<F, M>(self, message: F) -> Outcome<T>
    where
        X: core::error::Error + Send + Sync + 'static,
        F: FnOnce() -> M,
        M: Into<crate::types::alloc_type::String>,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(cause) => Outcome::failure_error(Error::with_cause(message(), cause)),
        }
    }
}

/// Extension trait converting an `Option` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OptionExt;
///
/// let missing: Option<u8> = None;
/// let outcome = missing.ok_or_failure("user not found");
/// assert!(outcome.is_failure());
///
/// assert_eq!(Some(1).ok_or_failure("unused").object(), Some(&1));
/// ```
pub trait OptionExt<T> {
    /// `Some(v)` becomes `success(v)`; `None` becomes `failure(error)`.
    fn ok_or_failure<M: IntoError>(self, error: M) -> Outcome<T>;

    /// Like [`ok_or_failure`](OptionExt::ok_or_failure) but builds the error
    /// only when the option is empty.
    fn ok_or_else_failure<M, F>(self, error: F) -> Outcome<T>
    where
        M: IntoError,
        F: FnOnce() -> M;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_failure<M: IntoError>(self, error: M) -> Outcome<T> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error),
        }
    }

    #[inline]
    fn ok_or_else_failure<M, F>(self, error: F) -> Outcome<T>
    where
        M: IntoError,
        F: FnOnce() -> M,
    {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error()),
        }
    }
}
