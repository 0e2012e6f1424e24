//! Alternating between two sequences.

use crate::Sequence;

/// Alternates between two sequences, continuing with whichever is left.
///
/// Each call pulls from the side whose turn it is; if that side is empty, the
/// other side is pulled instead on the same call. Exhausts once both sides are.
#[derive(Clone)]
pub struct Interleave<A, B> {
    a: A,
    b: B,
    a_turn: bool,
}

pub fn interleave<A, B>(a: A, b: B) -> Interleave<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Interleave { a, b, a_turn: true }
}

impl<A, B> Sequence for Interleave<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    fn next(&mut self) -> Option<A::Item> {
        let a_turn = self.a_turn;
        self.a_turn = !a_turn;
        if a_turn {
            self.a.next().or_else(|| self.b.next())
        } else {
            self.b.next().or_else(|| self.a.next())
        }
    }
}

/// Alternates between two sequences, stopping at the first empty turn.
///
/// Unlike [`Interleave`], there is no fallback: the first time the side whose
/// turn it is reports exhaustion, this adapter is exhausted for good.
#[derive(Clone)]
pub struct InterleaveShortest<A, B> {
    a: A,
    b: B,
    a_turn: bool,
    done: bool,
}

pub fn interleave_shortest<A, B>(a: A, b: B) -> InterleaveShortest<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    InterleaveShortest {
        a,
        b,
        a_turn: true,
        done: false,
    }
}

impl<A, B> Sequence for InterleaveShortest<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    fn next(&mut self) -> Option<A::Item> {
        if self.done {
            return None;
        }

        let item = if self.a_turn { self.a.next() } else { self.b.next() };
        self.a_turn = !self.a_turn;
        if item.is_none() {
            self.done = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_iter};

    #[test]
    fn test_interleave_drains_longer_side() {
        let merged: Vec<i32> = interleave(from_iter([1, 2, 3, 4]), from_iter([-1, -2])).collect();
        assert_eq!(merged, vec![1, -1, 2, -2, 3, 4]);

        let merged: Vec<i32> = interleave(from_iter([-1, -2]), from_iter([1, 2, 3, 4])).collect();
        assert_eq!(merged, vec![-1, 1, -2, 2, 3, 4]);
    }

    #[test]
    fn test_interleave_with_empty_side() {
        let merged: Vec<i32> = interleave(empty(), from_iter([1, 2, 3])).collect();
        assert_eq!(merged, vec![1, 2, 3]);
    }

    #[test]
    fn test_interleave_shortest_stops_on_empty_turn() {
        let merged: Vec<i32> =
            interleave_shortest(from_iter([1, 2, 3, 4]), from_iter([-1, -2])).collect();
        assert_eq!(merged, vec![1, -1, 2, -2, 3]);

        let merged: Vec<i32> =
            interleave_shortest(from_iter([-1, -2]), from_iter([1, 2, 3, 4])).collect();
        assert_eq!(merged, vec![-1, 1, -2, 2]);
    }

    #[test]
    fn test_interleave_shortest_latches_exhaustion() {
        let mut pulls = 0;
        let mut seq = interleave_shortest(
            empty(),
            crate::build::from_fn(|| {
                pulls += 1;
                Some(pulls)
            }),
        );

        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        drop(seq);
        assert_eq!(pulls, 0);
    }
}
