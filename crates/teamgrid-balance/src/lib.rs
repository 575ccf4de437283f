//! teamgrid-balance — constraint-first team balancing.
//!
//! Takes incoming players plus the current rosters, checks that the
//! request fits, picks a placement strategy, and reports per-player
//! assignments together with balance metrics. Persisting the result is
//! left to the caller.
//!
//! # Architecture
//!
//! ```text
//! TeamBalancer
//!   ├── validation (capacity, weights, roster count)
//!   ├── strategy selection
//!   │     ├── 2 teams        → pairwise (strongest with weakest)
//!   │     ├── elites + cap   → Partitioner::partition_constrained
//!   │     └── otherwise      → Partitioner::partition
//!   └── report (assignments, confidence, weights, variance, warnings)
//! ```

pub mod balancer;
pub mod confidence;
pub mod error;
pub mod pairwise;
pub mod validate;

pub use balancer::{TeamBalancer, balance_teams_constraint_first};
pub use confidence::assignment_confidence;
pub use error::{BalanceError, BalanceResult};
pub use pairwise::pairwise_optimal;
pub use validate::validate_constraints;
