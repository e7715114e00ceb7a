use crate::macros::rail_event;
use crate::traits::Error;
use crate::types::alloc_type::Box;
use crate::types::{Outcome, UnitOutcome};

/// A boxed deferred computation, for when thunks of different closure types
/// share one collection.
pub type Thunk<'a, V, E> = Box<dyn FnOnce() -> Outcome<V, E> + 'a>;

/// Left fold over outcomes that stops pulling at the first `Err`.
fn fold_outcomes<I, V, E, A, F>(outcomes: I, init: A, mut reducer: F) -> Outcome<A, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
    E: Error,
    F: FnMut(A, V) -> A,
{
    let mut acc = init;
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => acc = reducer(acc, value),
            Outcome::Err(error) => {
                rail_event!(debug, kind = error.kind_name(), "fold short-circuited");
                return Outcome::Err(error);
            }
        }
    }
    Outcome::Ok(acc)
}

/// Folds already computed outcomes left to right.
///
/// Every `Ok` payload is combined into the accumulator with `reducer`. The first
/// `Err` is returned as is and nothing after it is inspected. An empty input
/// yields `Ok(init)` without calling `reducer`.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::compose::reduce;
/// use exhaust_rail::Outcome;
///
/// let ok: [Outcome<i32, ZeroDivision>; 3] = [Outcome::Ok(2), Outcome::Ok(3), Outcome::Ok(5)];
/// assert_eq!(reduce(ok, 0, |acc, v| acc + v), Outcome::Ok(10));
///
/// let failed: [Outcome<i32, ZeroDivision>; 3] = [Outcome::Ok(2), Outcome::err_kind(), Outcome::Ok(5)];
/// assert!(reduce(failed, 0, |acc, v| acc + v).is_err());
/// ```
pub fn reduce<I, V, E, A, F>(results: I, init: A, reducer: F) -> Outcome<A, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
    E: Error,
    F: FnMut(A, V) -> A,
{
    fold_outcomes(results, init, reducer)
}

/// `Ok(())` when every outcome succeeded, otherwise the first `Err`.
pub fn all_ok<I, V, E>(results: I) -> UnitOutcome<E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
    E: Error,
{
    fold_outcomes(results, (), |(), _| ())
}

/// Like [`reduce`], but over thunks that are only called when their turn comes.
///
/// A thunk after the first failing one is never called, so its side effects
/// never happen. For thunks of different closure types, box them as [`Thunk`]s
/// or use the [`chain_calls!`](crate::chain_calls) macro.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::compose::{chain_calls, Thunk};
/// use exhaust_rail::Outcome;
///
/// let thunks: Vec<Thunk<'_, i32, ZeroDivision>> = vec![
///     Box::new(|| Outcome::Ok(2)),
///     Box::new(|| Outcome::err_kind()),
///     Box::new(|| -> Outcome<i32, ZeroDivision> { panic!("never called") }),
/// ];
/// assert!(chain_calls(thunks, 0, |acc, v| acc + v).is_err());
/// ```
pub fn chain_calls<I, V, E, A, F>(thunks: I, init: A, reducer: F) -> Outcome<A, E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Outcome<V, E>,
    E: Error,
    F: FnMut(A, V) -> A,
{
    fold_outcomes(thunks.into_iter().map(|thunk| thunk()), init, reducer)
}

/// Calls thunks in order and reports whether all of them succeeded.
pub fn run_all<I, V, E>(thunks: I) -> UnitOutcome<E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Outcome<V, E>,
    E: Error,
{
    chain_calls(thunks, (), |(), _| ())
}

/// Short-circuiting folds for any iterator of outcomes.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::{safe_divide, ZeroDivision};
/// use exhaust_rail::compose::OutcomeIterExt;
/// use exhaust_rail::Outcome;
///
/// let sum = [4.0, 2.0].into_iter().map(|d| safe_divide(1.0, d)).fold_ok(0.0, |a, b| a + b);
/// assert_eq!(sum, Outcome::Ok(0.75));
///
/// let mut pulled = 0;
/// let checked = [1.0, 0.0, 2.0]
///     .into_iter()
///     .inspect(|_| pulled += 1)
///     .map(|d| safe_divide(1.0, d))
///     .all_ok();
/// assert!(matches!(checked, Outcome::Err(ZeroDivision { .. })));
/// assert_eq!(pulled, 2);
/// ```
pub trait OutcomeIterExt<V, E: Error>: Iterator<Item = Outcome<V, E>> + Sized {
    #[inline]
    fn fold_ok<A, F>(self, init: A, reducer: F) -> Outcome<A, E>
    where
        F: FnMut(A, V) -> A,
    {
        fold_outcomes(self, init, reducer)
    }

    #[inline]
    fn all_ok(self) -> UnitOutcome<E> {
        all_ok(self)
    }
}

impl<I, V, E> OutcomeIterExt<V, E> for I
where
    I: Iterator<Item = Outcome<V, E>>,
    E: Error,
{
}
