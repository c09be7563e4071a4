//! Operation outcomes that carry a success flag, an optional payload and
//! every structured error collected along the way.
//!
//! The public surface is re-exported from the crate root; import
//! `outcome_rail::*`, the [`prelude`], or individual modules.
//!
//! # Examples
//!
//! ## Success and Failure
//!
//! ```
//! use outcome_rail::{Outcome, GenericError};
//!
//! let ok = Outcome::success(42);
//! assert!(ok.is_success());
//! assert_eq!(ok.object(), Some(&42));
//!
//! let failed: Outcome<i32> = Outcome::failure_messages("disk full", ["quota exceeded"]);
//! assert!(failed.is_failure());
//! assert_eq!(failed.error_count(), 2);
//! assert_eq!(failed.first_error().unwrap().message(), "disk full");
//! ```
//!
//! ## Chaining Without Branching
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut audited = 0;
//! let outcome = Outcome::success(1)
//!     .if_success_then(|| Outcome::failure("account locked"))
//!     .if_success_then(|| Outcome::success(3))
//!     .if_failure(|_| audited += 1);
//!
//! assert_eq!(outcome, Outcome::failure("account locked"));
//! assert_eq!(audited, 1);
//! ```
//!
//! ## Rendering
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let failed: Outcome<()> = Outcome::failure_error(Error::new("boom"));
//! assert_eq!(
//!     failed.to_string(),
//!     "Result{success=false, object=null, errors=[Error[message=boom, throwable=null, metadata=null]]}"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and the standard `Result`/`Option`
pub mod convert;
/// Macros for building metadata maps and failed outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability and extension traits
pub mod traits;
/// `Outcome`, `Error` and their supporting value types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

pub use traits::*;
pub use types::{
    error_formatter::OutcomeFormatConfig, Cause, Error, ErrorBuilder, ErrorVec, Metadata,
    MetadataValue, Outcome, OutcomeBuilder, OutcomeError, SUCCESS_VOID,
};
