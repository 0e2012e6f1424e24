use crate::Sequence;

/// Latches exhaustion of the wrapped sequence.
///
/// Once the inner sequence reports exhaustion it is dropped and never pulled
/// again, so this adapter keeps reporting exhaustion on every later call.
#[derive(Clone)]
pub struct Fuse<S> {
    inner: Option<S>,
}

pub fn fuse<S: Sequence>(inner: S) -> Fuse<S> {
    Fuse { inner: Some(inner) }
}

impl<S: Sequence> Sequence for Fuse<S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        let item = self.inner.as_mut()?.next();
        if item.is_none() {
            self.inner = None;
        }
        item
    }
}
