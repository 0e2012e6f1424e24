//! Core trait for pull-based sequences.
//!
//! This module defines the [`Sequence`] trait, the fundamental building block of
//! this library. A [`Sequence`] is anything that, when asked, either produces its
//! next item or reports that it is exhausted.
//!
//! # The Sequence Trait
//!
//! [`Sequence`] has a single required method, [`next`](Sequence::next). Every
//! adapter and every consuming algorithm is a provided method defined in terms of
//! it, so they apply uniformly to arrays, sources, and adapter chains alike.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = from_iter([1, 2, 3]).map(|x| x * 10);
//! assert_eq!(seq.next(), Some(10));
//! assert_eq!(seq.next(), Some(20));
//! assert_eq!(seq.next(), Some(30));
//! assert_eq!(seq.next(), None);
//! ```

use std::{fmt::Display, hash::Hash, ops::Add};

use crate::{
    collect::FromSequence,
    compose::{
        self, Chain, Cycle, Enumerate, Filter, Fuse, Interleave, InterleaveShortest, Map, Skip,
        SkipWhile, StepBy, Take, TakeWhile, Unique, UniqueBy, Zip,
    },
    consume,
    iter::SeqIter,
};

/// A producer of values, pulled one at a time.
///
/// A sequence is a value: cloning it copies its whole traversal state, so the
/// clone and the original advance independently.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let evens = from_iter(1..=10).filter(|v| v % 2 == 0);
/// assert_eq!(evens.clone().count(), 5);
/// assert_eq!(evens.sum::<i32>(), 30);
/// ```
pub trait Sequence {
    /// Type of the values this sequence produces.
    type Item;

    /// Produce the next item, or `None` once the sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Yield the first item, then every `step`-th item after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        compose::step_by(self, step)
    }

    /// Transform each item with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        compose::map(self, f)
    }

    /// Discard the first `n` items, then pass everything through.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        compose::skip(self, n)
    }

    /// Discard leading items while `predicate` holds, then pass everything through.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::skip_while(self, predicate)
    }

    /// Yield only the items for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::filter(self, predicate)
    }

    /// Yield at most `n` items.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        compose::take(self, n)
    }

    /// Yield items while `predicate` holds, then stop for good.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::take_while(self, predicate)
    }

    /// Pair each item with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        compose::enumerate(self)
    }

    /// Yield all of this sequence, then all of `other`.
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        compose::chain(self, other)
    }

    /// Pair items from this sequence and `other` until either runs out.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Sequence,
    {
        compose::zip(self, other)
    }

    /// Alternate between this sequence and `other`, draining whichever outlives the other.
    fn interleave<B>(self, other: B) -> Interleave<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        compose::interleave(self, other)
    }

    /// Alternate between this sequence and `other`, stopping as soon as the side due is empty.
    fn interleave_shortest<B>(self, other: B) -> InterleaveShortest<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        compose::interleave_shortest(self, other)
    }

    /// Repeat this sequence forever, restarting from a snapshot taken now.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        compose::cycle(self)
    }

    /// Skip items equal to one already yielded.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        compose::unique(self)
    }

    /// Skip items whose key equals the key of one already yielded.
    fn unique_by<K, F>(self, key: F) -> UniqueBy<Self, K, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        compose::unique_by(self, key)
    }

    /// Stop pulling the inner sequence after it first reports exhaustion.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        compose::fuse(self)
    }

    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Bridge into [`std::iter::Iterator`], e.g. for use in a `for` loop.
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    /// Returns `true` if `predicate` holds for every remaining item.
    ///
    /// Stops at the first failure. An empty sequence yields `true`.
    fn all<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::all(self, predicate)
    }

    /// Returns `true` if `predicate` holds for some remaining item.
    ///
    /// Stops at the first match. An empty sequence yields `false`.
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::any(self, predicate)
    }

    /// Returns `true` if `predicate` holds for no remaining item.
    fn none<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::none(self, predicate)
    }

    /// Returns the first remaining item matching `predicate`.
    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::find(self, predicate)
    }

    /// Largest item by natural ordering; the earliest one wins ties.
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        consume::max(self)
    }

    /// Smallest item by natural ordering; the earliest one wins ties.
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        consume::min(self)
    }

    /// Reduce with `pick(candidate, best)`, which returns whichever should win.
    fn max_by<F>(self, pick: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        consume::max_by(self, pick)
    }

    /// Reduce with `pick(candidate, best)`, which returns whichever should win.
    fn min_by<F>(self, pick: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        consume::min_by(self, pick)
    }

    /// Add every item onto `T::default()`.
    fn sum<T>(self) -> T
    where
        Self: Sized,
        T: Default + Add<Self::Item, Output = T>,
    {
        consume::sum(self)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        consume::fold(self, init, f)
    }

    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(self, f)
    }

    /// Render every item and join them with `sep`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(from_iter(1..=5).join(", "), "1, 2, 3, 4, 5");
    /// assert_eq!(empty::<i32>().join(", "), "");
    /// ```
    fn join(self, sep: &str) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        consume::join(self, sep)
    }

    /// Number of items remaining. Drains the sequence; clone first to keep it.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        consume::count(self)
    }

    /// Materialize the remaining items into `C`.
    ///
    /// The target decides how; [`Array`](crate::Array) counts a clone of the
    /// sequence first so it can allocate exactly once.
    fn collect<C>(self) -> C
    where
        Self: Sized + Clone,
        C: FromSequence<Self::Item>,
    {
        C::from_sequence(self)
    }
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, once};
    use either::Either;

    #[test]
    fn test_mut_ref_drives_without_consuming() {
        let mut seq = from_iter([1, 2, 3, 4, 5]);

        let mut head = Vec::new();
        (&mut seq).take(2).for_each(|v| head.push(v));

        assert_eq!(head, vec![1, 2]);
        assert_eq!(seq.next(), Some(3));
        assert_eq!(seq.count(), 2);
    }

    #[test]
    fn test_short_circuit_scans_resume_where_they_stopped() {
        let mut seq = from_iter([1, 3, 4, 5, 6]);

        assert!(seq.any(|v| v % 2 == 0));
        // `any` consumed up to and including 4
        assert_eq!(seq.next(), Some(5));
        assert_eq!(seq.find(|v| *v > 5), Some(6));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_boxed_sequence_keeps_combinators() {
        let boxed = from_iter([1, 2, 3]).map(|v| v * 2).boxed();
        let doubled: Vec<i32> = boxed.into_iter().collect();

        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_either_picks_one_pipeline_shape() {
        fn pipeline(reverse: bool) -> Either<impl Sequence<Item = i32> + Clone, impl Sequence<Item = i32> + Clone> {
            if reverse {
                Either::Left(from_iter([3, 2, 1]))
            } else {
                Either::Right(once(1).chain(from_iter([2, 3])))
            }
        }

        let forward: Vec<i32> = Sequence::collect(pipeline(false));
        let backward: Vec<i32> = Sequence::collect(pipeline(true));

        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1]);
    }

    #[test]
    fn test_clone_advances_independently() {
        let mut original = from_iter([10, 20, 30]).enumerate();
        let mut copy = original.clone();

        assert_eq!(original.next(), Some((0, 10)));
        assert_eq!(original.next(), Some((1, 20)));
        assert_eq!(copy.next(), Some((0, 10)));
        assert_eq!(original.count(), 1);
        assert_eq!(copy.count(), 2);
    }
}
