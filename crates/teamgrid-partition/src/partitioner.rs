//! Partitioning engine.
//!
//! [`Partitioner`] works from a set of seeded [`TeamState`]s so callers can
//! account for players already on a roster: seeded occupants count toward
//! size, weight and elite totals but are never moved.

use teamgrid_core::config::DEFAULT_MAX_ITERATIONS;
use teamgrid_core::{
    BalanceEvent, BalanceObserver, PartitionResult, Player, TeamState, TracingObserver,
    lightest_team, population_std_dev,
};

/// A player placed during the current run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Member {
    pub index: usize,
    pub weight: f64,
    /// Locked members are never swapped (elites placed under a cap).
    pub locked: bool,
}

/// Working state of a single partitioning run.
#[derive(Debug, Clone)]
pub(crate) struct Placement {
    pub states: Vec<TeamState>,
    pub members: Vec<Vec<Member>>,
    pub unplaced: Vec<usize>,
    pub iterations: u32,
}

impl Placement {
    pub fn new(seeds: Vec<TeamState>) -> Self {
        let members = vec![Vec::new(); seeds.len()];
        Self {
            states: seeds,
            members,
            unplaced: Vec::new(),
            iterations: 0,
        }
    }

    pub fn place(&mut self, team: usize, player: &Player, locked: bool) {
        self.states[team] = self.states[team].assign(player.weight, player.is_elite);
        self.members[team].push(Member {
            index: player.index,
            weight: player.weight,
            locked,
        });
        self.iterations += 1;
    }

    pub fn into_result(self) -> PartitionResult {
        let team_weights: Vec<f64> = self.states.iter().map(|s| s.weight).collect();
        PartitionResult {
            teams: self
                .members
                .into_iter()
                .map(|team| team.into_iter().map(|m| m.index).collect())
                .collect(),
            balance: population_std_dev(&team_weights),
            iterations: self.iterations,
            team_weights,
            unplaced: self.unplaced,
        }
    }
}

/// Players ordered heaviest first. Equal weights keep input order.
pub(crate) fn heaviest_first<'p, I>(players: I) -> Vec<&'p Player>
where
    I: IntoIterator<Item = &'p Player>,
{
    let mut sorted: Vec<&Player> = players.into_iter().collect();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    sorted
}

pub struct Partitioner<'a> {
    observer: &'a dyn BalanceObserver,
    max_iterations: u32,
}

impl<'a> Partitioner<'a> {
    pub fn new(observer: &'a dyn BalanceObserver) -> Self {
        Self {
            observer,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub(crate) fn observer(&self) -> &dyn BalanceObserver {
        self.observer
    }

    pub(crate) fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Partition `players` across the seeded teams, minimizing weight spread.
    pub fn partition(&self, players: &[Player], seeds: Vec<TeamState>) -> PartitionResult {
        let mut placement = Placement::new(seeds);
        if players.is_empty() {
            return placement.into_result();
        }

        let stalled = self.place_greedy(&mut placement, heaviest_first(players));
        if !stalled.is_empty() {
            self.observer.on_event(&BalanceEvent::PlacementStalled {
                unplaced: stalled.clone(),
            });
            placement.unplaced.extend(stalled);
        }

        self.optimize(&mut placement);
        placement.into_result()
    }

    /// Hand each player, in order, to the lightest team with room.
    ///
    /// Returns the indices left over once every team is full.
    pub(crate) fn place_greedy(&self, placement: &mut Placement, ordered: Vec<&Player>) -> Vec<usize> {
        for (pos, player) in ordered.iter().enumerate() {
            let Some(team) = lightest_team(&placement.states, TeamState::has_room) else {
                return ordered[pos..].iter().map(|p| p.index).collect();
            };
            placement.place(team, player, false);
        }
        Vec::new()
    }
}

/// Partition `players` into `num_teams` teams of at most `team_size` each.
///
/// `balance` in the result is the population standard deviation of team
/// totals.
pub fn karmarkar_karp_partition(
    players: &[Player],
    num_teams: usize,
    team_size: usize,
    max_iterations: u32,
) -> PartitionResult {
    Partitioner::new(&TracingObserver)
        .with_max_iterations(max_iterations)
        .partition(players, vec![TeamState::empty(team_size); num_teams])
}
