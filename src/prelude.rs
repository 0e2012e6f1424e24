//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Array, FromSequence, Sequence};

// Sources
pub use crate::build::{empty, from_fn, from_iter, once, repeat};

// Adapter constructors, for building pipelines without method syntax
pub use crate::compose::{
    chain, cycle, enumerate, filter, interleave, interleave_shortest, map, skip, skip_while,
    step_by, take, take_while, unique, unique_by, zip,
};
