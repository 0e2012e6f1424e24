//! Bounding a sequence.

use crate::Sequence;

/// Yields at most `n` items, then reports exhaustion without pulling again.
#[derive(Clone)]
pub struct Take<S> {
    inner: S,
    remaining: usize,
}

pub fn take<S: Sequence>(inner: S, n: usize) -> Take<S> {
    Take { inner, remaining: n }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }
}

/// Yields items while a predicate holds.
///
/// The first failing item is consumed and dropped, and every later call reports
/// exhaustion without touching the inner sequence.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    inner: S,
    predicate: P,
    done: bool,
}

pub fn take_while<S, P>(inner: S, predicate: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        inner,
        predicate,
        done: false,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_iter};

    #[test]
    fn test_take_prefix() {
        let head: Vec<i32> = take(from_iter(1..=5), 2).collect();
        assert_eq!(head, vec![1, 2]);
    }

    #[test]
    fn test_take_never_pulls_past_n() {
        let mut pulls = 0;
        let mut seq = take(
            from_fn(|| {
                pulls += 1;
                Some(pulls)
            }),
            3,
        );

        while seq.next().is_some() {}
        assert_eq!(seq.next(), None);
        drop(seq);
        assert_eq!(pulls, 3);
    }

    #[test]
    fn test_take_zero() {
        assert_eq!(take(from_iter([1, 2]), 0).next(), None);
    }

    #[test]
    fn test_take_while_stops_for_good() {
        let mut seq = take_while(from_iter([2, 4, 6, 7, 8]), |v| v % 2 == 0);

        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), Some(4));
        assert_eq!(seq.next(), Some(6));
        // 7 is consumed here and lost; 8 is never reached
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_take_while_consumes_the_failing_item() {
        let mut source = from_iter([1, 2, 30, 4]);
        let mut taken = Vec::new();
        take_while(&mut source, |v| *v < 10).for_each(|v| taken.push(v));

        assert_eq!(taken, vec![1, 2]);
        assert_eq!(source.next(), Some(4));
    }
}
