//! Conversion helpers between [`Outcome`] and the standard `Result`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edge
//! of existing code: wrap a `Result` coming in, or flatten an `Outcome` back
//! into a `Result` when handing it to an API that expects one.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Err("failed");
//! let outcome: Outcome<i32> = result.into();
//! assert!(outcome.is_failure());
//!
//! let back = outcome_to_result(Outcome::success(5));
//! assert_eq!(back.unwrap(), Some(5));
//! ```

use crate::traits::IntoError;
use crate::types::alloc_type::Vec;
use crate::types::{Error, ErrorVec, Outcome};

/// Converts an `Outcome` into a `Result`.
///
/// # Returns
///
/// * `Ok(object)` for a success; the payload may be absent and non-critical
///   errors are dropped
/// * `Err(errors)` for a failure
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let failed: Outcome<u8> = Outcome::failure("bad input");
/// let errors = outcome_to_result(failed).unwrap_err();
/// assert_eq!(errors[0].message(), "bad input");
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<Option<T>, ErrorVec<E>> {
    outcome.into_result()
}

/// Converts a `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Ok::<_, String>(1));
/// assert!(outcome.is_success());
/// ```
#[inline]
pub fn result_to_outcome<T, X: IntoError>(result: Result<T, X>) -> Outcome<T> {
    Outcome::from_result(result)
}

impl<T, E> Outcome<T, E> {
    /// `Ok(object)` for a success, `Err(errors)` for a failure.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, ErrorVec<E>> {
        if self.success {
            Ok(self.object)
        } else {
            Err(self.errors)
        }
    }
}

impl<T, X: IntoError> From<Result<T, X>> for Outcome<T, Error> {
    #[inline]
    fn from(result: Result<T, X>) -> Self {
        Self::from_result(result)
    }
}

/// Collects outcomes into one, accumulating every error.
///
/// The result is a success iff every input succeeded. Payloads present in the
/// successful inputs are collected in order; errors from all inputs (including
/// non-critical errors on successes) are kept in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.object(), Some(&vec![1, 2]));
///
/// let mixed: Outcome<Vec<i32>> =
///     vec![Outcome::success(1), Outcome::failure("x"), Outcome::failure("y")].into_iter().collect();
/// assert!(mixed.is_failure());
/// assert_eq!(mixed.error_count(), 2);
/// ```
impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut success = true;
        let mut objects = Vec::new();
        let mut errors = ErrorVec::new();

        for outcome in iter {
            success &= outcome.success;
            if outcome.success {
                objects.extend(outcome.object);
            }
            errors.extend(outcome.errors);
        }

        Outcome { success, object: if success { Some(objects) } else { None }, errors }
    }
}
