use crate::types::{Cause, Metadata};

/// Read access to a single failure record.
///
/// [`Error`](crate::Error) is the canonical implementation. Implement this for
/// a custom record type to carry it in an [`Outcome`](crate::Outcome) while
/// keeping the formatting and tracing helpers available.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Cause, GenericError, Metadata, Outcome, OutcomeBuilder};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct HttpError {
///     status: u16,
///     reason: String,
/// }
///
/// impl GenericError for HttpError {
///     fn message(&self) -> &str {
///         &self.reason
///     }
///
///     fn cause(&self) -> Option<&Cause> {
///         None
///     }
///
///     fn metadata(&self) -> Option<&Metadata> {
///         None
///     }
/// }
///
/// let outcome: Outcome<(), HttpError> = OutcomeBuilder::new()
///     .success(false)
///     .error(HttpError { status: 503, reason: "unavailable".into() })
///     .build()
///     .unwrap();
///
/// assert_eq!(outcome.first_error().unwrap().message(), "unavailable");
/// ```
pub trait GenericError {
    /// Text describing the failure. Always present.
    fn message(&self) -> &str;

    /// The underlying error that caused this failure, if any.
    fn cause(&self) -> Option<&Cause>;

    /// Additional structured information, e.g. a severity.
    fn metadata(&self) -> Option<&Metadata>;
}

impl<E: GenericError + ?Sized> GenericError for &E {
    #[inline]
    fn message(&self) -> &str {
        (**self).message()
    }

    #[inline]
    fn cause(&self) -> Option<&Cause> {
        (**self).cause()
    }

    #[inline]
    fn metadata(&self) -> Option<&Metadata> {
        (**self).metadata()
    }
}
