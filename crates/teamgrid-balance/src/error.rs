//! Balancer error types.

use thiserror::Error;

/// Errors that abort a balancing call. Recoverable problems are reported
/// as warnings on the result instead.
#[derive(Debug, Error, PartialEq)]
pub enum BalanceError {
    #[error(
        "{players} players exceed total capacity of {capacity}: cannot fit all players without violating team size constraints"
    )]
    CapacityExceeded { players: usize, capacity: usize },

    #[error("player {index} has invalid weight {weight}: weights must be finite and non-negative")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("player index {0} appears more than once")]
    DuplicatePlayer(usize),

    #[error("{actual} existing rosters supplied for {expected} teams")]
    TeamCountMismatch { expected: usize, actual: usize },
}

pub type BalanceResult<T> = Result<T, BalanceError>;
