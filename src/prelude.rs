//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failure!`], [`metadata!`]
//! - **Types**: [`Outcome`], [`Error`], [`Cause`], [`Metadata`], [`OutcomeError`]
//! - **Traits**: [`GenericError`], [`IntoError`], [`ResultExt`], [`OptionExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load_limit(raw: &str) -> Outcome<u32> {
//!     raw.parse::<u32>().into_outcome_with(|| format!("invalid limit `{}`", raw))
//! }
//!
//! let limit = load_limit("x").object_or(100);
//! assert_eq!(limit, 100);
//! ```

// Macros
pub use crate::{failure, metadata};

// Core types
pub use crate::types::{Cause, Error, Metadata, Outcome, OutcomeError};

// Traits
pub use crate::traits::{GenericError, IntoError, OptionExt, ResultExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TracingOutcomeExt;
