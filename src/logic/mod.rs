//! Swiss engine logic: tiebreakers, standings, round-1 seeding, pairing, late entries.

mod late_entry;
mod lifecycle;
mod pairing;
mod seeding;
mod standings;
pub mod tiebreakers;

pub use late_entry::backfill_losses;
pub use lifecycle::{is_round_complete, next_round_number};
pub use pairing::{pair_round, PairingHistory};
pub use seeding::{seed_round_one, SeedingMode};
pub use standings::{calculate_standings, StandingsEngine};
