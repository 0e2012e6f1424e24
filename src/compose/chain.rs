use crate::Sequence;

/// Create a sequence that yields all of `first`, then all of `second`.
///
/// Both sequences must yield the same item type.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain {
        first: Some(first),
        second,
    }
}

/// Chains two sequences back to back.
///
/// Created via `chain()` or [`Sequence::chain`]. The first sequence is dropped
/// once it reports exhaustion, so it is never pulled again.
#[derive(Clone)]
pub struct Chain<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.as_mut() {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None, // we drop the first sequence when it's done
            }
        }
        self.second.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_fn, from_iter};

    #[test]
    fn test_chain_switches_to_second_after_first_done() {
        let mut seq = chain(from_iter([1, 2]), from_iter([3]));

        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), Some(3));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_chain_is_associative() {
        let a = from_iter(0..5);
        let b = from_iter([3, 2, 1]);

        let left: Vec<i32> = a.clone().chain(b.clone()).chain(a.clone()).collect();
        let right: Vec<i32> = a.clone().chain(b.chain(a)).collect();

        assert_eq!(left, vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2, 3, 4]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_chain_with_empty_sides() {
        let seq = chain(empty(), from_iter([7, 8]));
        assert_eq!(seq.collect::<Vec<i32>>(), vec![7, 8]);

        let seq = chain(from_iter([7, 8]), empty());
        assert_eq!(seq.collect::<Vec<i32>>(), vec![7, 8]);
    }

    #[test]
    fn test_chain_never_pulls_first_after_exhaustion() {
        let mut pulls = 0;
        // yields None first, then would resume if pulled again
        let flaky = from_fn(move || {
            pulls += 1;
            (pulls > 1).then_some(pulls)
        });
        let mut seq = chain(flaky, from_iter([100, 200]));

        assert_eq!(seq.next(), Some(100));
        assert_eq!(seq.next(), Some(200));
        assert_eq!(seq.next(), None);
    }
}
