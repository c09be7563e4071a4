//! Core traits for outcome handling.
//!
//! - [`GenericError`]: the three-accessor capability every error slot exposes
//! - [`IntoError`]: conversion of messages and records into an [`Error`](crate::Error)
//! - [`ResultExt`] / [`OptionExt`]: lifting standard `Result`/`Option` values into an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{GenericError, IntoError};
//!
//! let err = "disk full".into_error();
//! assert_eq!(err.message(), "disk full");
//! assert!(err.cause().is_none());
//! ```

pub mod generic_error;
pub mod into_error;
pub mod result_ext;

pub use generic_error::GenericError;
pub use into_error::IntoError;
pub use result_ext::{OptionExt, ResultExt};
