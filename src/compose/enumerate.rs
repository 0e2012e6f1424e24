use crate::Sequence;

/// Pairs each item with a zero-based position.
///
/// The position advances once per yielded item.
#[derive(Clone)]
pub struct Enumerate<S> {
    inner: S,
    index: usize,
}

pub fn enumerate<S: Sequence>(inner: S) -> Enumerate<S> {
    Enumerate { inner, index: 0 }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }
}
