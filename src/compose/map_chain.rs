use crate::macros::rail_event;
use crate::traits::Error;
use crate::types::Outcome;
use core::fmt;
use core::iter::FusedIterator;

/// Lazy iterator returned by [`map_chain`], yielding one outcome per source item.
///
/// Each call to `next` pulls exactly one item from the source and runs it through
/// the stages. Nothing is buffered.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct MapChain<I, F> {
    iter: I,
    stage: F,
}

/// Applies `stage` to every item of `source`.
///
/// Further stages are appended with [`MapChain::then`]. An `Err` at any stage
/// skips the remaining stages for that item only; the next item starts over at
/// the first stage.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::compose::map_chain;
/// use exhaust_rail::Outcome;
///
/// fn invert(x: f64) -> Outcome<f64, ZeroDivision> {
///     if x == 0.0 { Outcome::err_kind() } else { Outcome::Ok(1.0 / x) }
/// }
///
/// let out: Vec<_> = map_chain([0.0, 1.0, 2.0, 4.0], invert).collect();
/// assert!(out[0].is_err());
/// assert_eq!(out[1..], [Outcome::Ok(1.0), Outcome::Ok(0.5), Outcome::Ok(0.25)]);
/// ```
pub fn map_chain<S, F, U, E>(source: S, stage: F) -> MapChain<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Outcome<U, E>,
    E: Error,
{
    MapChain { iter: source.into_iter(), stage }
}

impl<I, F> MapChain<I, F> {
    /// Appends a stage fed with the `Ok` payload of the previous one.
    ///
    /// The new stage decides the error type of the chain. Errors from earlier
    /// stages are converted into it with `Into`, so a later stage returning an
    /// [`error_union!`](crate::error_union) enum widens the whole chain.
    pub fn then<G, U, V, E, E2>(self, mut next: G) -> MapChain<I, impl FnMut(I::Item) -> Outcome<V, E2>>
    where
        I: Iterator,
        F: FnMut(I::Item) -> Outcome<U, E>,
        G: FnMut(U) -> Outcome<V, E2>,
        E: Error + Into<E2>,
        E2: Error,
    {
        let MapChain { iter, mut stage } = self;
        MapChain {
            iter,
            stage: move |item| match stage(item) {
                Outcome::Ok(value) => next(value),
                Outcome::Err(error) => Outcome::Err(error.into()),
            },
        }
    }
}

impl<I, F, U, E> Iterator for MapChain<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Outcome<U, E>,
    E: Error,
{
    type Item = Outcome<U, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let outcome = (self.stage)(self.iter.next()?);
        if outcome.is_err() {
            rail_event!(
                trace,
                kind = outcome.as_result().err().map(|error| error.kind_name()),
                "map_chain item failed"
            );
        }
        Some(outcome)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U, E> ExactSizeIterator for MapChain<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> Outcome<U, E>,
    E: Error,
{
}

impl<I, F, U, E> FusedIterator for MapChain<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Outcome<U, E>,
    E: Error,
{
}

impl<I: fmt::Debug, F> fmt::Debug for MapChain<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapChain").field("iter", &self.iter).finish_non_exhaustive()
    }
}
