//! Swiss-system tournament engine: ranked standings with tiebreakers and round pairings.
//!
//! Pure computation over an append-only match log. Every call rebuilds standings and
//! pairing history from the full log; any randomness comes from the `Rng` passed in.

pub mod logic;
pub mod models;

pub use logic::{
    backfill_losses, calculate_standings, is_round_complete, next_round_number, pair_round,
    seed_round_one, PairingHistory, SeedingMode, StandingsEngine,
};
pub use models::{
    active_players, effective_matches, Match, MatchId, MatchResult, Outcome, PlayerId, Registration,
    RegistrationStatus, Result, StandingsEntry, SwissConfig, SwissError, TiebreakerCode,
    BYE_GAME_WINS, DEFAULT_FLOOR,
};
