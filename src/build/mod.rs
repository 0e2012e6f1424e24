//! Building sequences from scratch
//!
//! This module provides sources that start a pipeline without an
//! [`Array`](crate::Array): single values, repeated values, closures, and std iterators.

mod func;
mod iter;

// Re-export building blocks
pub use func::{empty, from_fn, once, repeat, Empty, FromFn, Once, Repeat};
pub use iter::{from_iter, FromIter};
