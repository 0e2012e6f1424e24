//! # lazyseq: Composable Lazy Sequences
//!
//! Build pipelines over values that are pulled one at a time, and drive them to a
//! result only when asked.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: anything that produces its next item or reports exhaustion
//! - **[`FromSequence`]**: anything that can be built from a sequence
//!
//! ## Key Features
//!
//! - **Lazy**: adapters do no work until a terminal operation pulls from them
//! - **Composable**: every adapter is itself a [`Sequence`] and owns what it wraps
//! - **Value semantics**: cloning a pipeline copies its traversal state, so the
//!   copy and the original advance independently
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let numbers = Array::from([1, 1, 1, 2, -3, 1]);
//!
//! let distinct: Array<i32> = numbers.iter().unique().collect();
//! assert_eq!(distinct.as_slice(), &[1, 2, -3]);
//!
//! let merged = from_iter([1, 2, 3, 4]).interleave(from_iter([-1, -2]));
//! assert_eq!(merged.join(" "), "1 -1 2 -2 3 4");
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`Array::iter`] - elements of an array, by reference
//! - [`from_iter(iterable)`](build::from_iter) - any std iterable
//! - [`from_fn(f)`](build::from_fn) - whatever a closure produces
//! - [`once(value)`](build::once), [`repeat(value)`](build::repeat), [`empty()`](build::empty)
//!
//! **Adapters** (methods on [`Sequence`], types in [`compose`]):
//! `step_by`, `map`, `skip`, `skip_while`, `filter`, `take`, `take_while`,
//! `enumerate`, `chain`, `zip`, `interleave`, `interleave_shortest`, `cycle`,
//! `unique`, `unique_by`, `fuse`
//!
//! **Terminal operations** (methods on [`Sequence`], functions in [`consume`]):
//! `all`, `any`, `none`, `find`, `max`, `min`, `max_by`, `min_by`, `sum`,
//! `fold`, `for_each`, `join`, `count`, `collect`

pub mod array;
pub mod build;
mod collect;
pub mod compose;
pub mod consume;
mod error;
mod iter;
pub mod prelude;
mod sequence;

pub use array::Array;
pub use collect::FromSequence;
pub use error::ArrayError;
pub use iter::SeqIter;
pub use sequence::Sequence;
