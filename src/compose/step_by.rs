use crate::Sequence;

/// Yields the first item, then every `step`-th item after it.
///
/// After each yielded item, `step - 1` further items are pulled from the inner
/// sequence and discarded; the discard stops early if the inner sequence runs out.
#[derive(Clone)]
pub struct StepBy<S> {
    inner: S,
    step: usize,
}

/// Create a sequence that yields every `step`-th item of `inner`.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn step_by<S: Sequence>(inner: S, step: usize) -> StepBy<S> {
    assert!(step != 0, "step_by requires a non-zero step");
    StepBy { inner, step }
}

impl<S: Sequence> Sequence for StepBy<S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        let item = self.inner.next()?;
        for _ in 1..self.step {
            if self.inner.next().is_none() {
                break;
            }
        }
        Some(item)
    }
}
