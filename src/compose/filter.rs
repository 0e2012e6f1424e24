use crate::Sequence;

/// Yields only the items for which a predicate holds.
#[derive(Clone)]
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
}

pub fn filter<S, P>(inner: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter { inner, predicate }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        while let Some(item) = self.inner.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}
