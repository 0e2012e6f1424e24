//! Adapters that wrap other sequences
//!
//! Each adapter owns its inner sequence (or both, for the binary adapters) by
//! value, and pulls from it only when it is itself pulled. Adapters are usually
//! built through the matching method on [`Sequence`](crate::Sequence), but the
//! constructor functions here are public too.

mod chain;
mod cycle;
mod enumerate;
mod filter;
mod fuse;
mod interleave;
mod map;
mod skip;
mod step_by;
mod take;
mod unique;
mod zip;

// Re-export adapter types and constructors
pub use chain::{chain, Chain};
pub use cycle::{cycle, Cycle};
pub use enumerate::{enumerate, Enumerate};
pub use filter::{filter, Filter};
pub use fuse::{fuse, Fuse};
pub use interleave::{interleave, interleave_shortest, Interleave, InterleaveShortest};
pub use map::{map, Map};
pub use skip::{skip, skip_while, Skip, SkipWhile};
pub use step_by::{step_by, StepBy};
pub use take::{take, take_while, Take, TakeWhile};
pub use unique::{unique, unique_by, Unique, UniqueBy};
pub use zip::{zip, Zip};
