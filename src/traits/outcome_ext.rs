//! Extension traits that move standard `Result` and `Option` values onto the rail.
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::builtin::{BadKey, Overflow};
//! use exhaust_rail::traits::{OptionExt, ResultExt};
//! use exhaust_rail::{AnyError, Error, Outcome};
//!
//! let parsed: Outcome<u8, Overflow> = "300".parse::<u8>().map_err(|_| Overflow::new()).into_outcome();
//! assert!(parsed.is_err());
//!
//! let missing: Outcome<&str, AnyError> = None.ok_or_error(BadKey::new("env".into(), "HOME".into()));
//! assert_eq!(missing.unwrap_err().description(), "Mapping env has no key HOME");
//! ```

use crate::traits::{Error, UnitKind};
use crate::types::alloc_type::String;
use crate::types::Outcome;

/// Moves a `Result` onto the rail.
pub trait ResultExt<T, E> {
    /// Converts into an `Outcome`, widening the error through `Into` when needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use exhaust_rail::builtin::ZeroDivision;
    /// use exhaust_rail::traits::ResultExt;
    /// use exhaust_rail::{AnyError, Outcome};
    ///
    /// let result: Result<u32, ZeroDivision> = Err(ZeroDivision::new());
    /// let widened: Outcome<u32, AnyError> = result.into_outcome();
    /// assert!(widened.unwrap_err().is::<ZeroDivision>());
    /// ```
    fn into_outcome<K>(self) -> Outcome<T, K>
    where
        K: Error,
        E: Into<K>;

    /// Attaches a note to the error, if there is one.
    fn note(self, note: impl Into<String>) -> Self
    where
        E: Error;

    /// Attaches a lazily built note to the error. The closure only runs on `Err`.
    fn note_with<F>(self, f: F) -> Self
    where
        E: Error,
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome<K>(self) -> Outcome<T, K>
    where
        K: Error,
        E: Into<K>,
    {
        match self {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error.into()),
        }
    }

    #[inline]
    fn note(self, note: impl Into<String>) -> Self
    where
        E: Error,
    {
        self.map_err(|mut error| {
            error.meta_mut().push_note(note);
            error
        })
    }

    #[inline]
    fn note_with<F>(self, f: F) -> Self
    where
        E: Error,
        F: FnOnce() -> String,
    {
        self.map_err(|mut error| {
            error.meta_mut().push_note(f());
            error
        })
    }
}

/// Turns a missing value into a declared error.
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Ok(v)`; `None` becomes `Err` of the zero-argument kind `K`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exhaust_rail::builtin::Overflow;
    /// use exhaust_rail::traits::OptionExt;
    ///
    /// assert!(200u8.checked_add(100).ok_or_kind::<Overflow>().is_err());
    /// assert_eq!(200u8.checked_add(10).ok_or_kind::<Overflow>().unwrap(), 210);
    /// ```
    fn ok_or_kind<K: UnitKind>(self) -> Outcome<T, K>;

    /// `None` becomes `Err(error.into())`.
    fn ok_or_error<K, E>(self, error: E) -> Outcome<T, K>
    where
        K: Error,
        E: Into<K>;

    /// `None` becomes `Err(f())`. The closure only runs on `None`.
    fn ok_or_else_error<E, F>(self, f: F) -> Outcome<T, E>
    where
        E: Error,
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_kind<K: UnitKind>(self) -> Outcome<T, K> {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::err_kind(),
        }
    }

    #[inline]
    fn ok_or_error<K, E>(self, error: E) -> Outcome<T, K>
    where
        K: Error,
        E: Into<K>,
    {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(error.into()),
        }
    }

    #[inline]
    fn ok_or_else_error<E, F>(self, f: F) -> Outcome<T, E>
    where
        E: Error,
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(f()),
        }
    }
}
