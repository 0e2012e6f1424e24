use crate::Sequence;

/// Repeats a sequence endlessly.
///
/// Keeps an untouched snapshot of the sequence as it was at construction. When
/// the working copy runs out it is reset from the snapshot and pulled again, so
/// only an empty snapshot makes this adapter report exhaustion.
#[derive(Clone)]
pub struct Cycle<S> {
    original: S,
    inner: S,
}

pub fn cycle<S>(inner: S) -> Cycle<S>
where
    S: Sequence + Clone,
{
    Cycle {
        original: inner.clone(),
        inner,
    }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        match self.inner.next() {
            Some(item) => Some(item),
            None => {
                self.inner = self.original.clone();
                self.inner.next()
            }
        }
    }
}
