//! Transforming the items of a sequence.

use crate::Sequence;

/// Transforms each item yielded by the wrapped sequence.
///
/// Exhaustion passes through untouched; only produced items reach `f`.
#[derive(Clone)]
pub struct Map<S, F> {
    f: F,
    inner: S,
}

/// Create a sequence that transforms each item of `inner` with `f`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut labels = map(from_iter([1, 2]), |v: i32| format!("String_{v}"));
///
/// assert_eq!(labels.next().as_deref(), Some("String_1"));
/// assert_eq!(labels.next().as_deref(), Some("String_2"));
/// assert_eq!(labels.next(), None);
/// ```
pub fn map<S, B, F>(inner: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    Map { f, inner }
}

impl<S, B, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;
    fn next(&mut self) -> Option<B> {
        self.inner.next().map(&mut self.f)
    }
}
