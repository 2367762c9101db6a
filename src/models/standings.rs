//! StandingsEntry: one row of the derived, never persisted, standings table.

use crate::models::player::{PlayerId, Registration};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub registration: Registration,
    /// 1-based, contiguous.
    pub rank: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub match_points: u32,
    pub game_wins: u32,
    pub game_losses: u32,
    pub game_draws: u32,
    /// Tiebreaker code -> value, for every configured code.
    pub tiebreakers: BTreeMap<String, f64>,
    /// Reported matches only, byes included.
    pub matches_played: u32,
    /// Matches with no opponent (awarded byes and late-entry bye losses).
    pub bye_count: u32,
    pub opponents_faced: BTreeSet<PlayerId>,
}

impl StandingsEntry {
    pub fn player_id(&self) -> PlayerId {
        self.registration.player_id
    }

    /// Value for a tiebreaker code; 0.0 when it wasn't computed.
    pub fn tiebreaker(&self, code: &str) -> f64 {
        self.tiebreakers.get(code).copied().unwrap_or(0.0)
    }
}
