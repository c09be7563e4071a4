//! Trait for converting values into an [`Error`] record.
//!
//! # Implementations
//!
//! - `String`, `&str`, `Cow<str>` - a message-only error
//! - `Error` - identity conversion (no-op)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoError, Error};
//!
//! let e1 = "simple message".into_error();
//! let e2 = String::from("owned message").into_error();
//! let e3 = Error::new("prebuilt").into_error();
//!
//! assert_eq!(e1.message(), "simple message");
//! assert_eq!(e2.message(), "owned message");
//! assert_eq!(e3.message(), "prebuilt");
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::Error;

/// Converts a value into an [`Error`].
///
/// Message-based constructors of [`Outcome`](crate::Outcome) accept anything
/// implementing this trait.
///
/// # Implementing for Custom Types
///
/// ```
/// use outcome_rail::{metadata, traits::IntoError, Error};
///
/// struct Rejected {
///     field: &'static str,
/// }
///
/// impl IntoError for Rejected {
///     fn into_error(self) -> Error {
///         Error::with_metadata("rejected", metadata! { "field" => self.field })
///     }
/// }
///
/// let err = Rejected { field: "email" }.into_error();
/// assert_eq!(err.metadata().unwrap().get("field").unwrap().as_str(), Some("email"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into an outcome error",
    label = "this type does not implement `IntoError`",
    note = "wrap an error value with `Error::from_cause(..)` or implement `IntoError` manually"
)]
pub trait IntoError {
    /// Converts `self` into an [`Error`].
    fn into_error(self) -> Error;
}

impl IntoError for String {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for &str {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for Cow<'_, str> {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self.into_owned())
    }
}

impl IntoError for Error {
    #[inline]
    fn into_error(self) -> Error {
        self
    }
}
