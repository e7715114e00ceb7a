//! Railway variants of primitive operations that can fail.
//!
//! Each wrapper runs the native operation and returns `Ok` of its result, or the
//! matching declared kind as `Err` when the operation would fail.
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::builtin::{safe_get, safe_get_or, safe_int_divide, IntDivisionError};
//! use exhaust_rail::{Error, Outcome};
//! use std::collections::BTreeMap;
//!
//! assert_eq!(safe_int_divide(-7, 2), Outcome::Ok(-4));
//! assert!(matches!(safe_int_divide(i64::MIN, -1), Outcome::Err(IntDivisionError::Overflow(_))));
//!
//! let ports = BTreeMap::from([("http", 80), ("https", 443)]);
//! assert_eq!(safe_get(&ports, "https"), Outcome::Ok(&443));
//! assert_eq!(safe_get_or(&ports, "ssh", &22), Outcome::Ok(&22));
//!
//! let miss = safe_get(&ports, "ssh").unwrap_err();
//! assert_eq!(miss.description(), r#"Mapping ["http", "https"] has no key "ssh""#);
//! ```

use crate::types::alloc_type::{format, BTreeMap, String};
use crate::types::Outcome;
use crate::{declare_error, error_union, ThrowKind};
use core::borrow::Borrow;
use core::fmt::Debug;

declare_error! {
    /// Division by zero.
    pub struct ZeroDivision {
        description: "Cannot divide by zero",
        throws: ThrowKind::DivisionByZero,
    }
}

declare_error! {
    /// An arithmetic result outside the range of its type.
    pub struct Overflow {
        description: "Arithmetic operation overflowed",
        throws: ThrowKind::Overflow,
    }
}

declare_error! {
    /// A key lookup that found nothing. Both fields hold `Debug` renderings.
    pub struct BadKey {
        description: "Mapping {mapping} has no key {key}",
        throws: ThrowKind::MissingKey,
        args: { mapping: String, key: String },
    }
}

declare_error! {
    pub struct BadIndex {
        description: "Index {index} is out of range for length {len}",
        throws: ThrowKind::OutOfRange,
        args: { index: usize, len: usize },
    }
}

error_union! {
    /// Ways integer division can fail.
    pub enum IntDivisionError {
        ZeroDivision(ZeroDivision),
        Overflow(Overflow),
    }
}

/// `a / b`, or [`ZeroDivision`] when `b` is zero.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::safe_divide;
/// use exhaust_rail::Outcome;
///
/// assert_eq!(safe_divide(5.0, 2.0), Outcome::Ok(2.5));
/// assert!(safe_divide(5.0, 0.0).is_err());
/// ```
#[inline]
pub fn safe_divide(a: f64, b: f64) -> Outcome<f64, ZeroDivision> {
    if b == 0.0 {
        return Outcome::err_kind();
    }
    Outcome::Ok(a / b)
}

/// Floor division: the quotient is rounded towards negative infinity.
///
/// Fails with [`ZeroDivision`] when `b` is zero and with [`Overflow`] for
/// `i64::MIN / -1`.
pub fn safe_int_divide(a: i64, b: i64) -> Outcome<i64, IntDivisionError> {
    if b == 0 {
        return Outcome::Err(ZeroDivision::new().into());
    }
    let Some(quotient) = a.checked_div(b) else {
        return Outcome::Err(Overflow::new().into());
    };
    if a % b != 0 && (a < 0) != (b < 0) {
        return Outcome::Ok(quotient - 1);
    }
    Outcome::Ok(quotient)
}

/// Key-value containers [`safe_get`] can read from.
pub trait Lookup<Q: ?Sized> {
    type Value;

    fn lookup(&self, key: &Q) -> Option<&Self::Value>;

    /// How the container appears in a [`BadKey`] description.
    fn render(&self) -> String;
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord + Debug,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }

    fn render(&self) -> String {
        format!("{:?}", self.keys())
    }
}

#[cfg(feature = "std")]
impl<K, V, Q, S> Lookup<Q> for std::collections::HashMap<K, V, S>
where
    K: Borrow<Q> + core::hash::Hash + Eq + Debug,
    Q: core::hash::Hash + Eq + ?Sized,
    S: core::hash::BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }

    fn render(&self) -> String {
        format!("{:?}", self.keys())
    }
}

/// Reads `key` from `map`, or fails with [`BadKey`].
pub fn safe_get<'m, M, Q>(map: &'m M, key: &Q) -> Outcome<&'m M::Value, BadKey>
where
    M: Lookup<Q> + ?Sized,
    Q: Debug + ?Sized,
{
    match map.lookup(key) {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(BadKey::new(map.render(), format!("{key:?}"))),
    }
}

/// Reads `key` from `map`, falling back to `default` on a miss. Never fails.
pub fn safe_get_or<'m, M, Q>(map: &'m M, key: &Q, default: &'m M::Value) -> Outcome<&'m M::Value, BadKey>
where
    M: Lookup<Q> + ?Sized,
    Q: ?Sized,
{
    Outcome::Ok(map.lookup(key).unwrap_or(default))
}

/// Reads `slice[index]`, or fails with [`BadIndex`].
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::safe_index;
/// use exhaust_rail::Error;
///
/// let primes = [2, 3, 5];
/// assert_eq!(safe_index(&primes, 1).unwrap(), &3);
/// assert_eq!(
///     safe_index(&primes, 3).unwrap_err().description(),
///     "Index 3 is out of range for length 3"
/// );
/// ```
#[inline]
pub fn safe_index<T>(slice: &[T], index: usize) -> Outcome<&T, BadIndex> {
    match slice.get(index) {
        Some(item) => Outcome::Ok(item),
        None => Outcome::Err(BadIndex::new(index, slice.len())),
    }
}
