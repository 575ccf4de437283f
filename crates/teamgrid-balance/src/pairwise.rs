//! Two-team pairing strategy.
//!
//! Players are sorted strongest first and consumed from both ends. Each
//! step gives the strongest remaining player to the lighter team with room
//! (on equal weight, the team with more open slots, then team 0) and pairs them with the weakest remaining player on
//! the same team. When that team fills up, the weakest player goes to the
//! other team. One linear pass, no search.

use std::cmp::Ordering;

use teamgrid_core::{PartitionResult, Player, TeamState};

/// Whether team `a` should take the next strongest player ahead of `b`.
fn prefers(a: &TeamState, b: &TeamState) -> bool {
    match a.weight.total_cmp(&b.weight) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.remaining() >= b.remaining(),
    }
}

/// Pick the team for the strongest remaining player.
fn front_target(states: &[TeamState; 2]) -> Option<usize> {
    let [a, b] = states;
    if a.has_room() && (!b.has_room() || prefers(a, b)) {
        Some(0)
    } else if b.has_room() {
        Some(1)
    } else {
        None
    }
}

/// Balance `players` across two seeded teams.
///
/// `balance` in the result is the absolute difference between the two
/// final team weights, not a standard deviation.
pub fn pairwise_optimal(players: &[Player], seeds: [TeamState; 2]) -> PartitionResult {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut states = seeds;
    let mut teams: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
    let mut iterations = 0u32;

    let mut place = |states: &mut [TeamState; 2], team: usize, player: &Player| {
        states[team] = states[team].assign(player.weight, player.is_elite);
        teams[team].push(player.index);
        iterations += 1;
    };

    // Remaining players are sorted[front..end].
    let mut front = 0;
    let mut end = sorted.len();
    while front < end {
        let Some(target) = front_target(&states) else {
            break;
        };
        place(&mut states, target, sorted[front]);
        front += 1;

        if front == end {
            break;
        }
        let partner = if states[target].has_room() {
            target
        } else if states[1 - target].has_room() {
            1 - target
        } else {
            break;
        };
        place(&mut states, partner, sorted[end - 1]);
        end -= 1;
    }

    let team_weights = vec![states[0].weight, states[1].weight];
    PartitionResult {
        teams: teams.into_iter().collect(),
        balance: (team_weights[0] - team_weights[1]).abs(),
        iterations,
        team_weights,
        unplaced: sorted[front..end].iter().map(|p| p.index).collect(),
    }
}
