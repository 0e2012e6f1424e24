use crate::Sequence;

/// Adapts a std [`Iterator`] into a [`Sequence`].
#[derive(Clone)]
pub struct FromIter<I> {
    iter: I,
}

/// Create a sequence from anything iterable.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let doubled: Vec<i32> = from_iter(vec![1, 2, 3]).map(|v| v * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iterable.into_iter(),
    }
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}
