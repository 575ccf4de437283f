//! teamgrid.toml configuration parser.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on elite players per team.
pub const DEFAULT_MAX_ELITE_PER_TEAM: usize = 2;
pub const DEFAULT_BALANCE_THRESHOLD: f64 = 50.0;
/// Iteration bound for the partitioner, greedy and local-search phases combined.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Constraints applied by the balancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    /// Elite players allowed per team. 0 disables elite handling.
    pub max_elite_per_team: usize,
    /// Reserved for caller-side role policy; not used by placement.
    pub enforce_role_distribution: bool,
    /// Downgrade "too many players" from an error to a warning.
    pub allow_partial_fill: bool,
    /// Scale for confidence buckets. Does not affect placement.
    pub balance_threshold: f64,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            max_elite_per_team: DEFAULT_MAX_ELITE_PER_TEAM,
            enforce_role_distribution: false,
            allow_partial_fill: false,
            balance_threshold: DEFAULT_BALANCE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    pub max_iterations: u32,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamgridConfig {
    #[serde(default)]
    pub constraints: ConstraintConfig,
    #[serde(default)]
    pub partition: PartitionConfig,
}

impl TeamgridConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TeamgridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.constraints.balance_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "balance_threshold must be a positive number, got {threshold}"
            )));
        }
        Ok(())
    }

    /// A teamgrid.toml with every default written out.
    pub fn scaffold() -> Self {
        Self::default()
    }
}
