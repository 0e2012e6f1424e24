//! Collection targets for [`Sequence::collect`](crate::Sequence::collect).

use crate::Sequence;

/// Types that can be built from a sequence.
///
/// The sequence is handed over by value together with the right to clone it, so a
/// target that needs the length up front can count an independent copy and then
/// fill from the original, leaving no shared cursor behind.
pub trait FromSequence<A>: Sized {
    fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = A> + Clone;
}

impl<T> FromSequence<T> for Vec<T> {
    fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = T> + Clone,
    {
        seq.into_iter().collect()
    }
}

impl FromSequence<char> for String {
    fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = char> + Clone,
    {
        seq.into_iter().collect()
    }
}

impl<'a> FromSequence<&'a str> for String {
    fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = &'a str> + Clone,
    {
        seq.into_iter().collect()
    }
}
