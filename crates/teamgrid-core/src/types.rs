//! Shared types used across TeamGrid crates.

use serde::{Deserialize, Serialize};

/// A player to be placed on a team.
///
/// `index` is opaque to the engine: it refers back into the caller's
/// roster. Display metadata is carried through untouched and never
/// takes part in any arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub index: usize,
    /// Skill or strength metric, in caller-defined units. Must be >= 0.
    pub weight: f64,
    #[serde(default)]
    pub is_elite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_rank: Option<String>,
}

impl Player {
    pub fn new(index: usize, weight: f64) -> Self {
        Self {
            index,
            weight,
            is_elite: false,
            role: None,
            username: None,
            peak_rank: None,
        }
    }

    pub fn elite(index: usize, weight: f64) -> Self {
        Self {
            is_elite: true,
            ..Self::new(index, weight)
        }
    }
}

/// Outcome of a partitioning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Team index → player indices placed on that team by this run.
    pub teams: Vec<Vec<usize>>,
    /// Population standard deviation of per-team total weight.
    pub balance: f64,
    pub iterations: u32,
    /// Per-team total weight, including any seeded occupants.
    pub team_weights: Vec<f64>,
    /// Players that could not be placed without breaking a constraint.
    pub unplaced: Vec<usize>,
}

impl PartitionResult {
    /// Number of players placed across all teams.
    pub fn placed_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }
}

/// Strategy chosen by the balancer for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "Pairwise Optimal")]
    PairwiseOptimal,
    #[serde(rename = "Constrained Karmarkar-Karp")]
    ConstrainedKarmarkarKarp,
    #[serde(rename = "Karmarkar-Karp")]
    KarmarkarKarp,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::PairwiseOptimal => "Pairwise Optimal",
            Strategy::ConstrainedKarmarkarKarp => "Constrained Karmarkar-Karp",
            Strategy::KarmarkarKarp => "Karmarkar-Karp",
        }
    }

    /// Constraint names reported alongside the hard team-size limit.
    pub fn constraint_label(&self) -> Option<&'static str> {
        match self {
            Strategy::PairwiseOptimal => Some("2-Team Pair Balancing"),
            Strategy::ConstrainedKarmarkarKarp => Some("Elite Distribution"),
            Strategy::KarmarkarKarp => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Placement of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub player_index: usize,
    pub team_index: usize,
    pub reasoning: String,
    /// In (0, 1]. Shared by every assignment of a single call.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// The strategy's own balance metric (stddev, or absolute difference
    /// for the two-team strategy).
    pub score: f64,
    /// Population variance of `team_weights`.
    pub variance: f64,
    /// Final per-team totals: existing members plus new assignments.
    pub team_weights: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceMetadata {
    pub algorithm: Strategy,
    pub iterations: u32,
    pub constraints_enforced: Vec<String>,
    pub warnings: Vec<String>,
}

/// Full report returned by the constraint-first balancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintBalanceResult {
    pub assignments: Vec<TeamAssignment>,
    pub balance: BalanceSummary,
    pub metadata: BalanceMetadata,
}

impl ConstraintBalanceResult {
    /// Player indices assigned to `team_index`, in assignment order.
    pub fn members_of(&self, team_index: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .filter(|a| a.team_index == team_index)
            .map(|a| a.player_index)
            .collect()
    }
}

/// Outcome of a post-hoc constraint audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<String>,
}
