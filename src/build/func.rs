use std::marker::PhantomData;

use crate::Sequence;

/// Produces items from a closure until it returns `None`.
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;
    fn next(&mut self) -> Option<T> {
        (self.0)()
    }
}

/// Create a sequence from a closure.
///
/// Exhaustion is whatever the closure reports; wrap the result in
/// [`fuse`](crate::Sequence::fuse) if the closure may produce again after a `None`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut counter = from_fn(move || {
///     n += 1;
///     if n <= 3 { Some(n) } else { None }
/// });
/// assert_eq!(counter.next(), Some(1));
/// assert_eq!(counter.next(), Some(2));
/// assert_eq!(counter.next(), Some(3));
/// assert_eq!(counter.next(), None);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(f)
}

/// Yields clones of one value indefinitely.
///
/// Never exhausts on its own; bound it with `take` or `take_while`.
#[derive(Clone)]
pub struct Repeat<T>(T);

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        Some(self.0.clone())
    }
}

/// Create a sequence that repeats `value` forever.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat('x').take(3).collect::<String>(), "xxx");
/// ```
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat(value)
}

/// Yields one value, then reports exhaustion on every later call.
#[derive(Clone)]
pub struct Once<T>(Option<T>);

pub fn once<T>(value: T) -> Once<T> {
    Once(Some(value))
}

impl<T> Sequence for Once<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.take()
    }
}

/// A sequence that never yields.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty(PhantomData)
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        None
    }
}
