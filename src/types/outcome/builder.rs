use super::Outcome;
use crate::types::{Error, ErrorVec, OutcomeError};

/// Mutable staging object for an [`Outcome`].
///
/// Single owner, consumed by [`build`](OutcomeBuilder::build). The success
/// flag is required; the payload and errors are optional.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome, OutcomeError};
///
/// let warning = Error::new("cache miss");
/// let built = Outcome::builder()
///     .success(true)
///     .object(10)
///     .error(warning.clone())
///     .build()
///     .unwrap();
///
/// assert_eq!(built, Outcome::success_with_errors(10, [warning]));
///
/// let missing_flag = Outcome::<i32>::builder().build();
/// assert!(matches!(missing_flag, Err(OutcomeError::InvalidBuilderState { .. })));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct OutcomeBuilder<T, E = Error> {
    success: Option<bool>,
    object: Option<T>,
    errors: ErrorVec<E>,
}

impl<T, E> OutcomeBuilder<T, E> {
    #[inline]
    pub fn new() -> Self {
        Self { success: None, object: None, errors: ErrorVec::new() }
    }

    /// Sets the success flag.
    #[inline]
    pub fn success(mut self, success: bool) -> Self {
        self.success = Some(success);
        self
    }

    /// Sets the payload. Not rejected on a failure, though factories never
    /// produce failures with payloads.
    #[inline]
    pub fn object(mut self, object: T) -> Self {
        self.object = Some(object);
        self
    }

    /// Appends one error.
    #[inline]
    pub fn error(mut self, error: E) -> Self {
        self.errors.push(error);
        self
    }

    /// Appends every error from `errors`, in order.
    #[inline]
    pub fn errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.errors.extend(errors);
        self
    }

    /// Finalizes the outcome.
    ///
    /// # Errors
    ///
    /// [`OutcomeError::InvalidBuilderState`] when the success flag was never set.
    pub fn build(self) -> Result<Outcome<T, E>, OutcomeError> {
        let success = self
            .success
            .ok_or(OutcomeError::InvalidBuilderState { reason: "the success flag is not set" })?;
        Ok(Outcome { success, object: self.object, errors: self.errors })
    }
}

impl<T, E> Default for OutcomeBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
