//! Pairwise-swap local search.
//!
//! Each step looks only at the heaviest and lightest teams and applies the
//! first swap that narrows their gap by more than [`EPSILON`]. The search
//! stops on convergence, on a local optimum, or when the iteration budget
//! runs out.

use teamgrid_core::{BalanceEvent, TeamState};

use crate::partitioner::{Partitioner, Placement};

/// Gap below which two teams count as balanced.
pub const EPSILON: f64 = 0.1;
/// Upper bound on swap iterations per run, on top of `max_iterations`.
pub const MAX_SWAP_ITERATIONS: u32 = 100;

/// Heaviest and lightest team indices. First found wins on ties.
fn extremes(states: &[TeamState]) -> Option<(usize, usize)> {
    if states.len() < 2 {
        return None;
    }
    let mut heavy = 0;
    let mut light = 0;
    for (i, state) in states.iter().enumerate().skip(1) {
        if state.weight > states[heavy].weight {
            heavy = i;
        }
        if state.weight < states[light].weight {
            light = i;
        }
    }
    Some((heavy, light))
}

/// First swap between `heavy` and `light` that beats `gap` by more than
/// [`EPSILON`], as positions into each team's member list.
fn first_improving_swap(placement: &Placement, heavy: usize, light: usize, gap: f64) -> Option<(usize, usize, f64)> {
    let heavy_weight = placement.states[heavy].weight;
    let light_weight = placement.states[light].weight;

    for (hi, h) in placement.members[heavy].iter().enumerate() {
        if h.locked {
            continue;
        }
        for (li, l) in placement.members[light].iter().enumerate() {
            if l.locked {
                continue;
            }
            let new_heavy = heavy_weight - h.weight + l.weight;
            let new_light = light_weight - l.weight + h.weight;
            let after = (new_heavy - new_light).abs();
            if after < gap - EPSILON {
                return Some((hi, li, after));
            }
        }
    }
    None
}

impl Partitioner<'_> {
    pub(crate) fn optimize(&self, placement: &mut Placement) {
        let budget = self
            .max_iterations()
            .saturating_sub(placement.iterations)
            .min(MAX_SWAP_ITERATIONS);

        for _ in 0..budget {
            let Some((heavy, light)) = extremes(&placement.states) else {
                return;
            };
            let gap = placement.states[heavy].weight - placement.states[light].weight;
            if gap < EPSILON {
                self.observer().on_event(&BalanceEvent::Converged {
                    iterations: placement.iterations,
                });
                return;
            }

            let Some((hi, li, after)) = first_improving_swap(placement, heavy, light, gap) else {
                self.observer().on_event(&BalanceEvent::LocalOptimum {
                    iterations: placement.iterations,
                });
                return;
            };

            let out = placement.members[heavy][hi];
            let incoming = placement.members[light][li];
            placement.members[heavy][hi] = incoming;
            placement.members[light][li] = out;
            placement.states[heavy] = placement.states[heavy].exchange(out.weight, incoming.weight);
            placement.states[light] = placement.states[light].exchange(incoming.weight, out.weight);
            placement.iterations += 1;

            self.observer().on_event(&BalanceEvent::SwapApplied {
                heavy_team: heavy,
                light_team: light,
                before: gap,
                after,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use teamgrid_core::{Player, RecordingObserver};

    use super::*;

    fn placement_from(teams: &[&[f64]]) -> Placement {
        let mut placement = Placement::new(vec![TeamState::empty(8); teams.len()]);
        let mut index = 0;
        for (t, weights) in teams.iter().enumerate() {
            for w in weights.iter() {
                placement.place(t, &Player::new(index, *w), false);
                index += 1;
            }
        }
        placement.iterations = 0;
        placement
    }

    #[test]
    fn extremes_picks_first_on_tie() {
        let states = vec![TeamState::empty(1); 3];
        assert_eq!(extremes(&states), Some((0, 0)));
        assert_eq!(extremes(&states[..1]), None);
    }

    #[test]
    fn swap_narrows_gap() {
        // 10+8 vs 1+3 starts with a gap of 14.
        let mut placement = placement_from(&[&[10.0, 8.0], &[1.0, 3.0]]);
        let observer = RecordingObserver::new();
        Partitioner::new(&observer).optimize(&mut placement);

        let weights: Vec<f64> = placement.states.iter().map(|s| s.weight).collect();
        let gap = (weights[0] - weights[1]).abs();
        assert!(gap < 14.0, "gap should shrink, got {gap}");
        assert!(placement.iterations >= 1);
        assert!(observer.count(|e| matches!(e, BalanceEvent::SwapApplied { .. })) >= 1);
    }

    #[test]
    fn first_improving_swap_is_taken_not_best() {
        // Heavy 10+8, light 1+3, gap 14. Scan order tries (10,1) first:
        // 9 vs 13 → gap 4, which improves, so it is applied even though
        // swapping 8 and 3 would have done better.
        let placement = placement_from(&[&[10.0, 8.0], &[1.0, 3.0]]);
        let (hi, li, after) = first_improving_swap(&placement, 0, 1, 14.0).unwrap();
        assert_eq!((hi, li), (0, 0));
        assert!((after - 4.0).abs() < 1e-9);
    }

    #[test]
    fn locked_members_never_move() {
        let mut placement = Placement::new(vec![TeamState::empty(4); 2]);
        placement.place(0, &Player::elite(0, 10.0), true);
        placement.place(1, &Player::new(1, 1.0), false);
        Partitioner::new(&RecordingObserver::new()).optimize(&mut placement);

        assert_eq!(placement.members[0][0].index, 0);
        assert_eq!(placement.members[1][0].index, 1);
    }

    #[test]
    fn zero_budget_skips_search() {
        let mut placement = placement_from(&[&[10.0, 8.0], &[1.0, 3.0]]);
        placement.iterations = 5;
        let observer = RecordingObserver::new();
        Partitioner::new(&observer)
            .with_max_iterations(5)
            .optimize(&mut placement);

        assert!(observer.events().is_empty());
        assert_eq!(placement.states[0].weight, 18.0);
    }

    #[test]
    fn balanced_teams_converge_immediately() {
        let mut placement = placement_from(&[&[5.0, 5.0], &[6.0, 4.0]]);
        let observer = RecordingObserver::new();
        Partitioner::new(&observer).optimize(&mut placement);

        assert_eq!(observer.events(), vec![BalanceEvent::Converged { iterations: 0 }]);
    }
}
