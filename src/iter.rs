//! Iterator adapter for sequences.
//!
//! [`SeqIter`] wraps any [`Sequence`] and implements [`Iterator`], so sequences
//! work with `for` loops and every std consumer.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut total = 0;
//! for value in from_iter([1, 2, 3]).map(|v| v * 2).into_iter() {
//!     total += value;
//! }
//! assert_eq!(total, 12);
//! ```
//!
//! Borrowing the adapter leaves the sequence usable afterwards:
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = from_iter(1..=5).into_iter();
//! let head: Vec<_> = (&mut iter).take(2).collect();
//! assert_eq!(head, vec![1, 2]);
//! assert_eq!(iter.into_inner().count(), 3);
//! ```

use crate::Sequence;

/// Iterator adapter for [`Sequence`].
///
/// Repeatedly calls [`Sequence::next`] on the wrapped sequence.
#[derive(Clone)]
pub struct SeqIter<S> {
    seq: S,
}

impl<S> SeqIter<S>
where
    S: Sequence,
{
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Recover the wrapped sequence with whatever traversal state it has left.
    pub fn into_inner(self) -> S {
        self.seq
    }

    pub fn get_ref(&self) -> &S {
        &self.seq
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next()
    }
}
