//! Round 1: no standings exist yet, so players are ordered by shuffle or by sequence.

use crate::models::{active_players, Match, Registration, Result, SwissError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How round 1 orders players before pairing #1 vs #2, #3 vs #4, ...
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Uniform shuffle.
    #[default]
    Random,
    /// Registration sequence, ascending.
    Seeded,
}

impl FromStr for SeedingMode {
    type Err = SwissError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SeedingMode::Random),
            "seeded" => Ok(SeedingMode::Seeded),
            other => Err(SwissError::InvalidInput(format!(
                "unknown seeding mode {:?} (expected \"random\" or \"seeded\")",
                other
            ))),
        }
    }
}

/// Pair round 1 from the active registrations.
///
/// 1. Filter to active players; reject an empty roster or a repeated player id.
/// 2. Order them: shuffle (`Random`) or sort by sequence (`Seeded`).
/// 3. Pair sequentially in chunks of 2, tables numbered from 1.
/// 4. With an odd count the last player in that order gets the bye (appended last).
pub fn seed_round_one<R: Rng + ?Sized>(
    players: &[Registration],
    mode: SeedingMode,
    rng: &mut R,
) -> Result<Vec<Match>> {
    let mut active = active_players(players)?;

    match mode {
        SeedingMode::Random => active.shuffle(rng),
        SeedingMode::Seeded => active.sort_by_key(|p| p.sequence),
    }

    let mut matches: Vec<Match> = active
        .chunks_exact(2)
        .zip(1..)
        .map(|(pair, table)| Match::new(1, pair[0].player_id, pair[1].player_id, table))
        .collect();

    if let [bye] = active.chunks_exact(2).remainder() {
        log::debug!("[Round 1] Bye: {}", bye.player_id);
        matches.push(Match::bye(1, bye.player_id));
    }

    log::info!(
        "Seeded round 1 ({:?}): {} player(s), {} match(es)",
        mode,
        active.len(),
        matches.len()
    );
    Ok(matches)
}
