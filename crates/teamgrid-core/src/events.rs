//! Diagnostic events emitted while balancing.
//!
//! The partitioner and balancer never log directly. They report
//! [`BalanceEvent`]s to an injected [`BalanceObserver`]; the default
//! [`TracingObserver`] forwards them to `tracing`, and
//! [`RecordingObserver`] keeps them for inspection in tests.

use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::types::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BalanceEvent {
    StrategySelected {
        strategy: Strategy,
        players: usize,
        num_teams: usize,
    },
    /// Incoming players exceed the capacity that is left.
    CapacityWarning {
        players: usize,
        capacity: usize,
        message: String,
    },
    /// An elite player had no team under the elite cap.
    EliteSkipped { player_index: usize, weight: f64 },
    /// Greedy placement ran out of capacity with players left over.
    PlacementStalled { unplaced: Vec<usize> },
    /// A regular player could not be placed after the elite phase.
    RegularDropped { player_index: usize },
    SwapApplied {
        heavy_team: usize,
        light_team: usize,
        before: f64,
        after: f64,
    },
    /// Heaviest and lightest teams are within tolerance.
    Converged { iterations: u32 },
    /// No single swap improves the heaviest/lightest gap.
    LocalOptimum { iterations: u32 },
}

/// Receiver for diagnostic events.
pub trait BalanceObserver: Send + Sync {
    fn on_event(&self, event: &BalanceEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl BalanceObserver for TracingObserver {
    fn on_event(&self, event: &BalanceEvent) {
        match event {
            BalanceEvent::StrategySelected {
                strategy,
                players,
                num_teams,
            } => info!(%strategy, players, num_teams, "balancing strategy selected"),
            BalanceEvent::CapacityWarning {
                players,
                capacity,
                message,
            } => warn!(players, capacity, "{message}"),
            BalanceEvent::EliteSkipped {
                player_index,
                weight,
            } => warn!(
                player = player_index,
                weight, "elite player skipped — every team is at the elite cap or full"
            ),
            BalanceEvent::PlacementStalled { unplaced } => warn!(
                remaining = unplaced.len(),
                "no team has capacity left — placement aborted"
            ),
            BalanceEvent::RegularDropped { player_index } => warn!(
                player = player_index,
                "regular player dropped — no capacity left after elite placement"
            ),
            BalanceEvent::SwapApplied {
                heavy_team,
                light_team,
                before,
                after,
            } => debug!(heavy_team, light_team, before, after, "swap applied"),
            BalanceEvent::Converged { iterations } => {
                debug!(iterations, "partition converged")
            }
            BalanceEvent::LocalOptimum { iterations } => {
                debug!(iterations, "no improving swap — local optimum")
            }
        }
    }
}

/// Stores every event it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<BalanceEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BalanceEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&BalanceEvent) -> bool,
    {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

impl BalanceObserver for RecordingObserver {
    fn on_event(&self, event: &BalanceEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.on_event(&BalanceEvent::Converged { iterations: 3 });
        observer.on_event(&BalanceEvent::RegularDropped { player_index: 7 });

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], BalanceEvent::Converged { iterations: 3 });
        assert_eq!(
            observer.count(|e| matches!(e, BalanceEvent::RegularDropped { .. })),
            1
        );
    }

    #[test]
    fn tracing_observer_accepts_every_event() {
        let observer = TracingObserver;
        observer.on_event(&BalanceEvent::PlacementStalled { unplaced: vec![1, 2] });
        observer.on_event(&BalanceEvent::StrategySelected {
            strategy: Strategy::KarmarkarKarp,
            players: 4,
            num_teams: 2,
        });
    }
}
