//! Discarding a prefix of a sequence.

use crate::Sequence;

/// Discards the first `n` items on the first pull, then passes everything through.
#[derive(Clone)]
pub struct Skip<S> {
    inner: S,
    remaining: usize,
}

pub fn skip<S: Sequence>(inner: S, n: usize) -> Skip<S> {
    Skip { inner, remaining: n }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        if self.remaining != 0 {
            for _ in 0..std::mem::take(&mut self.remaining) {
                if self.inner.next().is_none() {
                    break;
                }
            }
        }
        self.inner.next()
    }
}

/// Discards leading items while a predicate holds.
///
/// The first item that fails the predicate is yielded, and from then on every
/// item passes through unchecked, including ones the predicate would reject.
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    inner: S,
    predicate: P,
    skipped: bool,
}

pub fn skip_while<S, P>(inner: S, predicate: P) -> SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile {
        inner,
        predicate,
        skipped: false,
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        if self.skipped {
            return self.inner.next();
        }

        self.skipped = true;
        while let Some(item) = self.inner.next() {
            if !(self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}
