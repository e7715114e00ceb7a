use crate::traits::Error;
use crate::types::Outcome;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Lazy iterator returned by [`lift_all`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LiftAll<I, E> {
    iter: I,
    _error: PhantomData<fn() -> E>,
}

/// Wraps every value from `values` in `Ok`, one at a time as the result is pulled.
///
/// Works over infinite sources. The result is restartable only if the source is,
/// which in Rust means cloning it while it is still an unconsumed iterator.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::compose::lift_all;
/// use exhaust_rail::Outcome;
///
/// let mut lifted = lift_all::<_, ZeroDivision>(1..);
/// assert_eq!(lifted.next(), Some(Outcome::Ok(1)));
/// assert_eq!(lifted.next(), Some(Outcome::Ok(2)));
/// ```
pub fn lift_all<I, E>(values: I) -> LiftAll<I::IntoIter, E>
where
    I: IntoIterator,
    E: Error,
{
    LiftAll { iter: values.into_iter(), _error: PhantomData }
}

impl<I, E> Iterator for LiftAll<I, E>
where
    I: Iterator,
    E: Error,
{
    type Item = Outcome<I::Item, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Outcome::Ok)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, E> DoubleEndedIterator for LiftAll<I, E>
where
    I: DoubleEndedIterator,
    E: Error,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Outcome::Ok)
    }
}

impl<I: ExactSizeIterator, E: Error> ExactSizeIterator for LiftAll<I, E> {}

impl<I: FusedIterator, E: Error> FusedIterator for LiftAll<I, E> {}

impl<I: Clone, E> Clone for LiftAll<I, E> {
    fn clone(&self) -> Self {
        Self { iter: self.iter.clone(), _error: PhantomData }
    }
}

impl<I: fmt::Debug, E> fmt::Debug for LiftAll<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiftAll").field("iter", &self.iter).finish()
    }
}
