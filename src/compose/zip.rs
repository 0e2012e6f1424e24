use crate::Sequence;

/// Pairs up items from two sequences.
///
/// Stops as soon as either side is exhausted. The first sequence is pulled
/// first, so when only the second runs out, the first's item of that round is lost.
#[derive(Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip { a, b }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);
    fn next(&mut self) -> Option<Self::Item> {
        let left = self.a.next()?;
        let right = self.b.next()?;
        Some((left, right))
    }
}
