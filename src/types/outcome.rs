use crate::traits::{Error, UnitKind};
use crate::types::alloc_type::String;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The railway-style return value: exactly one of a success payload or a declared error.
///
/// Unlike `core::result::Result`, the error side is constrained to [`Error`], which
/// gives [`unwrap`](Outcome::unwrap) a uniform meaning: it throws the carried error
/// through its mapped [`ThrowKind`](crate::ThrowKind) so the description and notes
/// surface in the panic.
///
/// Handle both variants with `match`, or with [`fold`](Outcome::fold) when a single
/// expression is wanted. The variant is the discriminator; there is no "unset" state.
///
/// # Type Parameters
///
/// * `V` - The success value type (`()` for operations without a payload)
/// * `E` - The error kind, or a union of kinds
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::{Error, Outcome};
///
/// fn divide(a: f64, b: f64) -> Outcome<f64, ZeroDivision> {
///     if b == 0.0 {
///         return Outcome::err_kind();
///     }
///     Outcome::Ok(a / b)
/// }
///
/// match divide(1.0, 0.0) {
///     Outcome::Ok(value) => println!("got {value}"),
///     Outcome::Err(err) => assert_eq!(err.description(), "Cannot divide by zero"),
/// }
///
/// assert!(bool::from(&divide(4.0, 2.0)));
/// assert_eq!(divide(4.0, 2.0).unwrap(), 2.0);
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<V, E: Error> {
    Ok(V),
    Err(E),
}

/// An outcome whose success carries no value.
pub type UnitOutcome<E> = Outcome<(), E>;

impl<E: Error> Outcome<(), E> {
    /// The valueless success, `Ok(())`.
    #[inline]
    pub const fn done() -> Self {
        Self::Ok(())
    }
}

impl<V, E: Error> Outcome<V, E> {
    /// Fails with a freshly instantiated zero-argument kind.
    ///
    /// This is the `Err(SomeKind)` shorthand: the kind is named, never constructed
    /// by the caller.
    #[inline]
    pub fn err_kind() -> Self
    where
        E: UnitKind,
    {
        Self::Err(E::instance())
    }

    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The success payload, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The carried error, discarding any success payload.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows the payload of whichever variant is held.
    #[inline]
    pub fn as_result(&self) -> core::result::Result<&V, &E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Mutable counterpart of [`as_result`](Self::as_result).
    #[inline]
    pub fn as_result_mut(&mut self) -> core::result::Result<&mut V, &mut E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<V, G>
    where
        G: Error,
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Converts the error into a wider kind, typically an [`error_union!`](crate::error_union)
    /// enum or [`AnyError`](crate::AnyError).
    #[inline]
    pub fn widen<G>(self) -> Outcome<V, G>
    where
        G: Error + From<E>,
    {
        self.map_err(G::from)
    }

    /// Runs the next fallible step on success; an `Err` passes through untouched.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<V, G>
    where
        G: Error,
        F: FnOnce(E) -> Outcome<V, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Total two-way dispatch: exactly one handler runs.
    #[inline]
    pub fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Returns the success payload, or throws the carried error.
    ///
    /// This is the escape hatch back to panicking control flow and belongs at trust
    /// boundaries such as top-level handlers and tests.
    ///
    /// # Panics
    ///
    /// Panics through [`Error::throw`] when the outcome is an `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => error.throw(),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> V
    where
        V: Default,
    {
        self.unwrap_or_else(|_| V::default())
    }

    /// Returns the carried error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        V: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("called `Outcome::unwrap_err()` on an `Ok` value: {value:?}"),
            Self::Err(error) => error,
        }
    }

    /// Attaches a note to the carried error. An `Ok` is returned unchanged.
    #[inline]
    pub fn with_note(self, note: impl Into<String>) -> Self {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(mut error) => {
                error.meta_mut().push_note(note);
                Self::Err(error)
            }
        }
    }

    /// Attaches several notes to the carried error, keeping their order.
    #[inline]
    pub fn with_notes<I, S>(self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(mut error) => {
                error.meta_mut().extend_notes(notes);
                Self::Err(error)
            }
        }
    }

    /// Converts into a standard `Result`, enabling `?` in functions returning one.
    #[inline]
    pub fn into_result(self) -> core::result::Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<V, E: Error> From<&Outcome<V, E>> for bool {
    /// `true` for `Ok`, `false` for `Err`.
    #[inline]
    fn from(outcome: &Outcome<V, E>) -> Self {
        outcome.is_ok()
    }
}

impl<V, E: Error> From<core::result::Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: core::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E: Error> From<Outcome<V, E>> for core::result::Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

/// `Ok(<value>)` with the value in its `Debug` form, so unit outcomes render
/// as `Ok(())`, or `Err(<description>)`.
impl<V: fmt::Debug, E: Error> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value:?})"),
            Self::Err(error) => write!(f, "Err({})", error.description()),
        }
    }
}

/// Collects into `Ok(collection)`, or stops at the first `Err` and returns it.
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    E: Error,
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();
        match failure {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}

impl<V, E: Error> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = core::option::IntoIter<V>;

    /// Yields the success payload once, or nothing for an `Err`.
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}
