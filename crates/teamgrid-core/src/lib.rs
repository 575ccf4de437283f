//! teamgrid-core — shared types for the team-balancing engine.
//!
//! Holds the data model passed between the partitioner and the balancer,
//! the per-team [`TeamState`] value object, the diagnostic observer
//! interface, and `teamgrid.toml` parsing.

pub mod config;
pub mod events;
pub mod stats;
pub mod team_state;
pub mod types;

pub use config::{ConfigError, ConstraintConfig, PartitionConfig, TeamgridConfig};
pub use events::{BalanceEvent, BalanceObserver, RecordingObserver, TracingObserver};
pub use stats::{population_std_dev, population_variance};
pub use team_state::{TeamState, lightest_team};
pub use types::*;
