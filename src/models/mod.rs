//! Data structures for the Swiss engine: registrations, matches, config, standings rows.

mod config;
mod error;
mod game;
mod player;
mod standings;

pub use config::{SwissConfig, TiebreakerCode, DEFAULT_FLOOR};
pub use error::{Result, SwissError};
pub use game::{effective_matches, Match, MatchId, MatchResult, Outcome, BYE_GAME_WINS};
pub use player::{active_players, PlayerId, Registration, RegistrationStatus};
pub use standings::StandingsEntry;
