//! Per-team accounting used by every placement phase.

use serde::{Deserialize, Serialize};

/// Occupancy, capacity, accumulated weight and elite count of one team.
///
/// Transitions are pure: [`TeamState::assign`] returns the next state and
/// leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub size: usize,
    pub capacity: usize,
    pub weight: f64,
    pub elites: usize,
}

impl TeamState {
    /// An empty team able to hold `capacity` players.
    pub fn empty(capacity: usize) -> Self {
        Self {
            size: 0,
            capacity,
            weight: 0.0,
            elites: 0,
        }
    }

    /// A team that already holds `members` as `(weight, is_elite)` pairs.
    pub fn seeded<I>(capacity: usize, members: I) -> Self
    where
        I: IntoIterator<Item = (f64, bool)>,
    {
        members
            .into_iter()
            .fold(Self::empty(capacity), |state, (weight, elite)| {
                state.assign(weight, elite)
            })
    }

    pub fn assign(self, weight: f64, is_elite: bool) -> Self {
        Self {
            size: self.size + 1,
            weight: self.weight + weight,
            elites: self.elites + usize::from(is_elite),
            ..self
        }
    }

    /// Swap one member of weight `out` for one of weight `incoming`.
    pub fn exchange(self, out: f64, incoming: f64) -> Self {
        Self {
            weight: self.weight - out + incoming,
            ..self
        }
    }

    pub fn has_room(&self) -> bool {
        self.size < self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.size)
    }

    /// Whether another elite player fits under `max_elite`.
    pub fn elite_room(&self, max_elite: usize) -> bool {
        self.elites < max_elite
    }
}

/// Index of the lightest team accepted by `eligible`.
///
/// Ties keep the lowest index: a later team only wins with strictly less
/// weight.
pub fn lightest_team<F>(teams: &[TeamState], eligible: F) -> Option<usize>
where
    F: Fn(&TeamState) -> bool,
{
    let mut best: Option<usize> = None;
    for (i, team) in teams.iter().enumerate() {
        if !eligible(team) {
            continue;
        }
        match best {
            Some(b) if team.weight >= teams[b].weight => {}
            _ => best = Some(i),
        }
    }
    best
}
