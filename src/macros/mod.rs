//! Ergonomic macros for building metadata and failed outcomes.
//!
//! - [`macro@crate::metadata`] - Builds a [`Metadata`](crate::Metadata) map from
//!   `key => value` pairs.
//! - [`macro@crate::failure`] - Formats a message and wraps it in a failed
//!   [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, metadata, Error, Outcome};
//!
//! let user_id = 42;
//! let failed: Outcome<()> = failure!("user {} is locked", user_id);
//! assert_eq!(failed.first_error().unwrap().message(), "user 42 is locked");
//!
//! let err = Error::with_metadata("throttled", metadata! { "retry_after" => 30, "region" => "eu" });
//! assert_eq!(err.metadata().unwrap().len(), 2);
//! ```

/// Builds a [`Metadata`](crate::Metadata) map.
///
/// Keys accept anything convertible into `String`, values anything
/// convertible into [`MetadataValue`](crate::MetadataValue). An empty
/// invocation yields an empty map.
///
/// # Examples
///
/// ```
/// use outcome_rail::{metadata, MetadataValue};
///
/// let meta = metadata! {
///     "severity" => "error",
///     "retryable" => false,
/// };
/// assert_eq!(meta.get("retryable"), Some(&MetadataValue::Boolean(false)));
/// assert!(metadata! {}.is_empty());
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Metadata::new()
            $(.with($key, $value))+
    };
}

/// Creates a failed [`Outcome`](crate::Outcome) whose single error carries a
/// formatted message.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome};
///
/// let attempt = 3;
/// let failed: Outcome<u32> = failure!("gave up after {} attempts", attempt);
/// assert!(failed.is_failure());
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::Outcome::failure_error($crate::Error::new($crate::__private::format!($($arg)*)))
    };
}
