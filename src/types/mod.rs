//! Value types: the [`Outcome`] container and the [`Error`] record it carries.
//!
//! Every value here is immutable once built. The only mutable staging objects
//! are [`OutcomeBuilder`] and [`ErrorBuilder`], which are consumed by `build()`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{metadata, Error, GenericError, Outcome};
//!
//! let err = Error::with_metadata("quota exceeded", metadata! { "severity" => "warn" });
//! let outcome = Outcome::success_with_errors(7, [err]);
//!
//! assert!(outcome.is_success());
//! assert!(outcome.has_errors());
//! assert_eq!(outcome.first_error().unwrap().message(), "quota exceeded");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod error_formatter;
pub mod metadata;
pub mod outcome;
pub mod outcome_error;

pub use error::*;
pub use metadata::*;
pub use outcome::*;
pub use outcome_error::*;

/// SmallVec-backed collection holding an outcome's errors.
///
/// Uses inline storage for one element, which covers the common single-error
/// failure without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

