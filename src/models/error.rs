//! Errors raised by seeding, pairing and config loading.

use crate::models::player::PlayerId;

/// Errors that can occur during engine operations.
#[derive(Debug, thiserror::Error)]
pub enum SwissError {
    /// Empty roster, no active players, unknown seeding mode, bad round number, etc.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The bracket cascade ran out of brackets with players still unpaired.
    #[error(
        "cannot pair round {round} without a rematch: {} player(s) left unpaired",
        .unpaired.len()
    )]
    PairingImpossible { round: u32, unpaired: Vec<PlayerId> },
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = SwissError> = std::result::Result<T, E>;
