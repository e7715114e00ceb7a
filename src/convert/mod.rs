//! Conversion helpers between `Outcome`, `Result` and the type-erased `AnyError`.
//!
//! These adapters make it easy to adopt `exhaust-rail` one function at a time:
//! wrap a legacy `Result` into an [`Outcome`], or flatten back to `Result` when
//! handing a value to an API that expects one.
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::builtin::{safe_divide, ZeroDivision};
//! use exhaust_rail::convert::*;
//! use exhaust_rail::{AnyError, Error, Outcome};
//!
//! let result = outcome_to_result(safe_divide(1.0, 0.0));
//! assert!(matches!(result, Err(ZeroDivision { .. })));
//!
//! let erased: Outcome<f64, AnyError> = erase_outcome(result_to_outcome(result));
//! assert_eq!(erased.unwrap_err().kind_name(), "ZeroDivision");
//! ```

use crate::traits::{Error, ErrorKind};
use crate::types::{AnyError, Outcome};

/// Converts an `Outcome` into the equivalent `Result`.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::safe_divide;
/// use exhaust_rail::convert::outcome_to_result;
///
/// assert_eq!(outcome_to_result(safe_divide(3.0, 2.0)), Ok(1.5));
/// ```
#[inline]
pub fn outcome_to_result<V, E: Error>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.into_result()
}

/// Converts a `Result` whose error is an [`Error`] into an `Outcome`.
#[inline]
pub fn result_to_outcome<V, E: Error>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from(result)
}

/// Erases the concrete error kind, keeping its arguments and notes.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::{safe_divide, ZeroDivision};
/// use exhaust_rail::convert::erase_outcome;
/// use exhaust_rail::Error;
///
/// let erased = erase_outcome(safe_divide(1.0, 0.0).with_note("while scaling"));
/// let err = erased.unwrap_err();
/// assert!(err.is::<ZeroDivision>());
/// assert_eq!(err.notes(), ["while scaling"]);
/// ```
#[inline]
pub fn erase_outcome<V, K: ErrorKind>(outcome: Outcome<V, K>) -> Outcome<V, AnyError> {
    outcome.map_err(AnyError::erase)
}
