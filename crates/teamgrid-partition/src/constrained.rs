//! Elite-capped partitioning.
//!
//! Elites are placed first, heaviest first, each on the lightest team that
//! has room and is under the cap. An elite with no such team is skipped and
//! reported, never forced onto a capped team. Regular players are then
//! placed greedily starting from the post-elite team states, so capacity
//! consumed by elites is known before any regular player is assigned.
//! Elites are locked during the swap search so the cap still holds after it.

use teamgrid_core::config::DEFAULT_MAX_ELITE_PER_TEAM;
use teamgrid_core::{
    BalanceEvent, PartitionResult, Player, TeamState, TracingObserver, lightest_team,
};

use crate::partitioner::{Partitioner, Placement, heaviest_first};

impl Partitioner<'_> {
    /// Partition with at most `max_elite` elite players per team.
    ///
    /// `max_elite == 0` disables elite handling and behaves like
    /// [`Partitioner::partition`].
    pub fn partition_constrained(
        &self,
        players: &[Player],
        seeds: Vec<TeamState>,
        max_elite: usize,
    ) -> PartitionResult {
        if max_elite == 0 {
            return self.partition(players, seeds);
        }

        let mut placement = Placement::new(seeds);
        if players.is_empty() {
            return placement.into_result();
        }

        let (elites, regulars): (Vec<&Player>, Vec<&Player>) =
            players.iter().partition(|p| p.is_elite);

        for elite in heaviest_first(elites) {
            let team = lightest_team(&placement.states, |t| {
                t.has_room() && t.elite_room(max_elite)
            });
            match team {
                Some(team) => placement.place(team, elite, true),
                None => {
                    self.observer().on_event(&BalanceEvent::EliteSkipped {
                        player_index: elite.index,
                        weight: elite.weight,
                    });
                    placement.unplaced.push(elite.index);
                }
            }
        }

        let dropped = self.place_greedy(&mut placement, heaviest_first(regulars));
        for &player_index in &dropped {
            self.observer()
                .on_event(&BalanceEvent::RegularDropped { player_index });
        }
        placement.unplaced.extend(dropped);

        self.optimize(&mut placement);
        placement.into_result()
    }
}

/// Partition into `num_teams` teams of `team_size`, allowing at most
/// `max_elite_per_team` elite players on any team.
///
/// See [`DEFAULT_MAX_ELITE_PER_TEAM`] for the conventional cap.
pub fn constrained_karmarkar_karp(
    players: &[Player],
    num_teams: usize,
    team_size: usize,
    max_elite_per_team: usize,
) -> PartitionResult {
    Partitioner::new(&TracingObserver).partition_constrained(
        players,
        vec![TeamState::empty(team_size); num_teams],
        max_elite_per_team,
    )
}

/// [`constrained_karmarkar_karp`] with the default elite cap.
pub fn constrained_karmarkar_karp_default(
    players: &[Player],
    num_teams: usize,
    team_size: usize,
) -> PartitionResult {
    constrained_karmarkar_karp(players, num_teams, team_size, DEFAULT_MAX_ELITE_PER_TEAM)
}
