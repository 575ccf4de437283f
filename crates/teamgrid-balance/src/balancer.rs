//! Constraint-first balancer.
//!
//! Validates a balancing request, seeds team state from the existing
//! rosters, dispatches to a strategy and turns the partition into a
//! [`ConstraintBalanceResult`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use teamgrid_core::config::DEFAULT_MAX_ITERATIONS;
use teamgrid_core::{
    BalanceEvent, BalanceMetadata, BalanceObserver, BalanceSummary, ConstraintBalanceResult,
    ConstraintConfig, PartitionResult, Player, Strategy, TeamAssignment, TeamState,
    TeamgridConfig, TracingObserver, population_variance,
};
use teamgrid_partition::Partitioner;

use crate::confidence::assignment_confidence;
use crate::error::{BalanceError, BalanceResult};
use crate::pairwise::pairwise_optimal;

/// Always reported in `constraints_enforced`.
const TEAM_SIZE_CONSTRAINT: &str = "Hard Team Size Limits";

pub struct TeamBalancer {
    config: ConstraintConfig,
    max_iterations: u32,
    observer: Arc<dyn BalanceObserver>,
}

impl TeamBalancer {
    pub fn new(config: ConstraintConfig) -> Self {
        Self {
            config,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn from_config(config: &TeamgridConfig) -> Self {
        Self::new(config.constraints.clone()).with_max_iterations(config.partition.max_iterations)
    }

    /// Route diagnostic events to `observer` instead of `tracing`.
    pub fn with_observer(mut self, observer: Arc<dyn BalanceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn config(&self) -> &ConstraintConfig {
        &self.config
    }

    /// Pick the strategy for this request.
    pub fn select_strategy(&self, players: &[Player], num_teams: usize) -> Strategy {
        if num_teams == 2 {
            Strategy::PairwiseOptimal
        } else if self.config.max_elite_per_team > 0 && players.iter().any(|p| p.is_elite) {
            Strategy::ConstrainedKarmarkarKarp
        } else {
            Strategy::KarmarkarKarp
        }
    }

    /// Place `players` onto `num_teams` teams of `team_size`.
    ///
    /// `existing_teams[i]` holds players already on team `i`; they count
    /// toward size, weight and elite totals but are never moved. Fewer
    /// rosters than teams is fine, missing ones are empty.
    pub fn balance(
        &self,
        players: &[Player],
        existing_teams: &[Vec<Player>],
        num_teams: usize,
        team_size: usize,
    ) -> BalanceResult<ConstraintBalanceResult> {
        check_inputs(players, existing_teams, num_teams)?;

        let mut warnings = Vec::new();

        let total_capacity = num_teams.saturating_mul(team_size);
        if players.len() > total_capacity {
            let message = format!(
                "{} players exceed total capacity of {} ({} teams of {})",
                players.len(),
                total_capacity,
                num_teams,
                team_size
            );
            self.warn_capacity(players.len(), total_capacity, &message);
            warnings.push(message);
            if !self.config.allow_partial_fill {
                return Err(BalanceError::CapacityExceeded {
                    players: players.len(),
                    capacity: total_capacity,
                });
            }
        }

        let seeds: Vec<TeamState> = (0..num_teams)
            .map(|i| {
                let roster = existing_teams.get(i).map(Vec::as_slice).unwrap_or_default();
                TeamState::seeded(team_size, roster.iter().map(|p| (p.weight, p.is_elite)))
            })
            .collect();

        let remaining = seeds
            .iter()
            .fold(0usize, |total, team| total.saturating_add(team.remaining()));
        if remaining < players.len() {
            let message = format!(
                "Remaining capacity ({}) is less than incoming players ({}); some players will not be placed",
                remaining,
                players.len()
            );
            self.warn_capacity(players.len(), remaining, &message);
            warnings.push(message);
        }

        let strategy = self.select_strategy(players, num_teams);
        self.observer.on_event(&BalanceEvent::StrategySelected {
            strategy,
            players: players.len(),
            num_teams,
        });

        let partition = self.run(strategy, players, seeds);
        warnings.extend(self.unplaced_warnings(strategy, &partition, players));

        Ok(self.report(strategy, players, partition, warnings))
    }

    fn run(&self, strategy: Strategy, players: &[Player], seeds: Vec<TeamState>) -> PartitionResult {
        let partitioner =
            Partitioner::new(self.observer.as_ref()).with_max_iterations(self.max_iterations);

        match strategy {
            Strategy::PairwiseOptimal => match <[TeamState; 2]>::try_from(seeds) {
                Ok(pair) => pairwise_optimal(players, pair),
                // Only selected for exactly two teams.
                Err(seeds) => partitioner.partition(players, seeds),
            },
            Strategy::ConstrainedKarmarkarKarp => {
                partitioner.partition_constrained(players, seeds, self.config.max_elite_per_team)
            }
            Strategy::KarmarkarKarp => partitioner.partition(players, seeds),
        }
    }

    fn warn_capacity(&self, players: usize, capacity: usize, message: &str) {
        self.observer.on_event(&BalanceEvent::CapacityWarning {
            players,
            capacity,
            message: message.to_string(),
        });
    }

    fn unplaced_warnings(
        &self,
        strategy: Strategy,
        partition: &PartitionResult,
        players: &[Player],
    ) -> Vec<String> {
        let elite: HashSet<usize> = players
            .iter()
            .filter(|p| p.is_elite)
            .map(|p| p.index)
            .collect();
        let cap = self.config.max_elite_per_team;

        partition
            .unplaced
            .iter()
            .map(|index| {
                if strategy == Strategy::ConstrainedKarmarkarKarp && elite.contains(index) {
                    format!(
                        "Elite player {index} could not be placed without exceeding {cap} elite players per team"
                    )
                } else {
                    format!("Player {index} could not be placed: no team capacity remaining")
                }
            })
            .collect()
    }

    fn report(
        &self,
        strategy: Strategy,
        players: &[Player],
        partition: PartitionResult,
        warnings: Vec<String>,
    ) -> ConstraintBalanceResult {
        let confidence = assignment_confidence(partition.balance, self.config.balance_threshold);
        let reasoning = format!("{} assignment (balance: {:.1})", strategy, partition.balance);

        let team_of: HashMap<usize, usize> = partition
            .teams
            .iter()
            .enumerate()
            .flat_map(|(team, members)| members.iter().map(move |&index| (index, team)))
            .collect();

        // Input order, so callers can zip assignments back to their roster.
        let assignments = players
            .iter()
            .filter_map(|p| {
                team_of.get(&p.index).map(|&team_index| TeamAssignment {
                    player_index: p.index,
                    team_index,
                    reasoning: reasoning.clone(),
                    confidence,
                })
            })
            .collect();

        let mut constraints_enforced = vec![TEAM_SIZE_CONSTRAINT.to_string()];
        if let Some(label) = strategy.constraint_label() {
            constraints_enforced.push(label.to_string());
        }

        ConstraintBalanceResult {
            assignments,
            balance: BalanceSummary {
                score: partition.balance,
                variance: population_variance(&partition.team_weights),
                team_weights: partition.team_weights,
            },
            metadata: BalanceMetadata {
                algorithm: strategy,
                iterations: partition.iterations,
                constraints_enforced,
                warnings,
            },
        }
    }
}

/// Reject malformed requests. Player indices must be unique across the
/// incoming players and every existing roster.
fn check_inputs(players: &[Player], existing_teams: &[Vec<Player>], num_teams: usize) -> BalanceResult<()> {
    if existing_teams.len() > num_teams {
        return Err(BalanceError::TeamCountMismatch {
            expected: num_teams,
            actual: existing_teams.len(),
        });
    }

    let mut seen = HashSet::new();
    for player in existing_teams.iter().flatten().chain(players) {
        if !seen.insert(player.index) {
            return Err(BalanceError::DuplicatePlayer(player.index));
        }
    }

    for player in players.iter().chain(existing_teams.iter().flatten()) {
        if !player.weight.is_finite() || player.weight < 0.0 {
            return Err(BalanceError::InvalidWeight {
                index: player.index,
                weight: player.weight,
            });
        }
    }
    Ok(())
}

/// Balance `players` onto `num_teams` teams of `team_size`, reporting
/// diagnostics through `tracing`.
pub fn balance_teams_constraint_first(
    players: &[Player],
    existing_teams: &[Vec<Player>],
    num_teams: usize,
    team_size: usize,
    config: &ConstraintConfig,
) -> BalanceResult<ConstraintBalanceResult> {
    TeamBalancer::new(config.clone()).balance(players, existing_teams, num_teams, team_size)
}
