//! A fixed-length, heap-backed array.
//!
//! [`Array`] is both a pipeline source, through [`Array::iter`], and a collection
//! target for [`Sequence::collect`]. Its length always equals its allocation:
//! there is no spare capacity, and every resize is a full reallocation.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut numbers = Array::with_len(10);
//! for i in 0..numbers.len() {
//!     numbers[i] = i;
//! }
//!
//! let product = numbers.iter().skip(1).take(3).fold(1usize, |acc, v| acc * v);
//! assert_eq!(product, 6);
//!
//! let evens: Array<usize> = numbers.iter().filter(|v| *v % 2 == 0).collect();
//! assert_eq!(evens.as_slice(), &[0, 2, 4, 6, 8]);
//! ```

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{collect::FromSequence, error::ArrayError, iter::SeqIter, Sequence};

/// A heap-allocated run of exactly `len` elements.
///
/// Cloning performs a deep, element-wise copy. [`Array::take`] moves the
/// contents out and leaves an empty array with no allocation behind.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    data: Box<[T]>,
}

#[cfg(feature = "tracing")]
fn trace_alloc(op: &'static str, len: usize) {
    tracing::trace!(op, len, "array allocation");
}

#[cfg(not(feature = "tracing"))]
fn trace_alloc(_op: &'static str, _len: usize) {}

impl<T> Array<T> {
    /// An empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// An array of `len` default elements.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        trace_alloc("with_len", len);
        Self {
            data: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Discard the current contents and reallocate to `len` default elements.
    pub fn reset(&mut self, len: usize)
    where
        T: Default,
    {
        *self = Self::with_len(len);
    }

    /// Move the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn try_get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.data
            .get(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        let slot = self.try_get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// A sequence over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            data: &self.data,
            cursor: 0,
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            data: items.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromSequence<T> for Array<T> {
    /// Counts a clone of `seq`, allocates exactly that many slots once, then
    /// fills them from `seq` in order.
    fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = T> + Clone,
    {
        let len = seq.clone().count();
        trace_alloc("from_sequence", len);

        let mut data = Vec::with_capacity(len);
        seq.take(len).enumerate().for_each(|(index, item)| {
            debug_assert_eq!(index, data.len());
            data.push(item);
        });
        Self::from(data)
    }
}

impl<'a, T: Clone> FromSequence<&'a T> for Array<T> {
    fn from_sequence<S>(seq: S) -> Self
    where
        S: Sequence<Item = &'a T> + Clone,
    {
        <Self as FromSequence<T>>::from_sequence(seq.map(T::clone))
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = SeqIter<Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self.iter())
    }
}

/// Sequence over the elements of an [`Array`], by reference.
pub struct Iter<'a, T> {
    data: &'a [T],
    cursor: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            data: self.data,
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Sequence for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let item = self.data.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}
