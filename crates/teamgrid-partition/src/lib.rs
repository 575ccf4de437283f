//! Balanced partitioning of weighted players into equal-capacity teams.
//!
//! Placement runs in two phases: a greedy pass that hands the heaviest
//! remaining player to the lightest team with room, then a bounded local
//! search that swaps single players between the heaviest and lightest
//! teams while that narrows the gap.
//!
//! # Components
//!
//! - **`partitioner`** — [`Partitioner`] engine and the plain entry point
//! - **`constrained`** — elite-capped variant
//! - **`search`** — pairwise-swap local optimization

pub mod constrained;
pub mod partitioner;
pub mod search;

pub use constrained::{constrained_karmarkar_karp, constrained_karmarkar_karp_default};
pub use partitioner::{Partitioner, karmarkar_karp_partition};
