use core::fmt::{self, Display};

/// Misuse of the [`Outcome`](crate::Outcome) or [`Error`](crate::Error) API.
///
/// These are local, synchronous signals raised at the point of misuse. They
/// are never retried or suppressed; callers either check preconditions first
/// (`has_errors()` before `first_error()`, `object()` before
/// `non_null_object()`) or treat them as programming errors.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeError};
///
/// let void = Outcome::success_void();
/// assert_eq!(void.first_error(), Err(OutcomeError::EmptyErrorAccess));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// A required argument was not supplied.
    NullArgument { name: &'static str },
    /// A value expected to be present was absent.
    NullReference { what: &'static str },
    /// The first error was requested from an empty error sequence.
    EmptyErrorAccess,
    /// `build()` was called on a builder missing a required field.
    InvalidBuilderState { reason: &'static str },
}

impl Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument { name } => write!(f, "required argument `{}` is missing", name),
            Self::NullReference { what } => write!(f, "{} is absent", what),
            Self::EmptyErrorAccess => {
                write!(f, "can't get the first error: the error sequence is empty")
            },
            Self::InvalidBuilderState { reason } => write!(f, "invalid builder state: {}", reason),
        }
    }
}

impl core::error::Error for OutcomeError {}
