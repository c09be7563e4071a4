//! Tracing integration for outcome-rail.
//!
//! Emits one `tracing` event per error carried by an [`Outcome`], so failures
//! and non-critical errors show up in whatever subscriber the application
//! installed.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::tracing_ext::TracingOutcomeExt;
//! use outcome_rail::Outcome;
//!
//! let failed: Outcome<u32> = Outcome::failure("payment declined").trace_errors();
//! assert!(failed.is_failure());
//! ```

use tracing::Level;

use crate::traits::GenericError;
use crate::types::alloc_type::String;
use crate::types::Outcome;

/// Extension trait logging an outcome's errors as `tracing` events.
///
/// Both methods hand the outcome back untouched so they slot into a chain.
pub trait TracingOutcomeExt: Sized {
    /// Logs every error at `WARN` for a failure and at `DEBUG` for a success
    /// carrying non-critical errors.
    fn trace_errors(self) -> Self;

    /// Logs every error at `level`, whatever the success flag.
    fn trace_errors_at(self, level: Level) -> Self;
}

impl<T, E: GenericError> TracingOutcomeExt for Outcome<T, E> {
    fn trace_errors(self) -> Self {
        let level = if self.is_success() { Level::DEBUG } else { Level::WARN };
        self.trace_errors_at(level)
    }

    fn trace_errors_at(self, level: Level) -> Self {
        let success = self.is_success();
        for (index, error) in self.errors().iter().enumerate() {
            emit(level, index, success, error);
        }
        self
    }
}

fn emit<E: GenericError>(level: Level, index: usize, success: bool, error: &E) {
    let cause = error.cause().map_or_else(|| String::from("null"), |c| c.to_string());
    let metadata = error.metadata().map_or_else(|| String::from("null"), |m| m.to_string());

    // `event!` needs the level as a constant.
    macro_rules! event_at {
        ($lvl:expr) => {
            tracing::event!(
                $lvl,
                index,
                success,
                error_message = error.message(),
                cause = %cause,
                metadata = %metadata,
                "outcome error"
            )
        };
    }

    if level == Level::ERROR {
        event_at!(Level::ERROR);
    } else if level == Level::WARN {
        event_at!(Level::WARN);
    } else if level == Level::INFO {
        event_at!(Level::INFO);
    } else if level == Level::DEBUG {
        event_at!(Level::DEBUG);
    } else {
        event_at!(Level::TRACE);
    }
}
