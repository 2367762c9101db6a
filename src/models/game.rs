//! Match and MatchResult: one table (or bye) in one round.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Game wins credited for a bye (2-0 equivalent).
pub const BYE_GAME_WINS: u32 = 2;

/// Outcome of a match from one player's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Match points: win=3, draw=1, loss=0.
    pub fn match_points(self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

/// Reported game counts for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player_1_wins: u32,
    pub player_2_wins: u32,
    #[serde(default)]
    pub draws: u32,
    pub reported_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn new(player_1_wins: u32, player_2_wins: u32, draws: u32) -> Self {
        Self {
            player_1_wins,
            player_2_wins,
            draws,
            reported_at: Utc::now(),
        }
    }
}

/// A single match. Immutable once created; `result` is None while awaiting a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub round: u32,
    pub player_1: PlayerId,
    /// None for a bye.
    pub player_2: Option<PlayerId>,
    /// None for a bye.
    pub table: Option<u32>,
    #[serde(default)]
    pub result: Option<MatchResult>,
}

impl Match {
    /// A scheduled match awaiting its result.
    pub fn new(round: u32, player_1: PlayerId, player_2: PlayerId, table: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            player_1,
            player_2: Some(player_2),
            table: Some(table),
            result: None,
        }
    }

    /// A bye: no opponent, no table, already reported as a full win.
    pub fn bye(round: u32, player: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            player_1: player,
            player_2: None,
            table: None,
            result: Some(MatchResult::new(BYE_GAME_WINS, 0, 0)),
        }
    }

    /// A synthetic loss for a round the player missed (late entry).
    pub fn bye_loss(round: u32, player: PlayerId) -> Self {
        Self {
            result: Some(MatchResult::new(0, BYE_GAME_WINS, 0)),
            ..Self::bye(round, player)
        }
    }

    /// Corrected or reported copy of this match, keeping the same id.
    /// Append it to the log; the original record is left untouched.
    pub fn with_result(&self, result: MatchResult) -> Self {
        Self {
            result: Some(result),
            ..self.clone()
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_2.is_none()
    }

    pub fn is_reported(&self) -> bool {
        self.result.is_some()
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.player_1 == player || self.player_2 == Some(player)
    }

    /// The other player in this match, if `player` took part and it wasn't a bye.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.player_1 == player {
            self.player_2
        } else if self.player_2 == Some(player) {
            Some(self.player_1)
        } else {
            None
        }
    }

    /// Game record `(wins, losses, draws)` for `player`, if reported and involved.
    pub fn games_for(&self, player: PlayerId) -> Option<(u32, u32, u32)> {
        let r = self.result.as_ref()?;
        if self.player_1 == player {
            Some((r.player_1_wins, r.player_2_wins, r.draws))
        } else if self.player_2 == Some(player) {
            Some((r.player_2_wins, r.player_1_wins, r.draws))
        } else {
            None
        }
    }

    /// Match outcome for `player`, if reported and involved.
    pub fn outcome_for(&self, player: PlayerId) -> Option<Outcome> {
        let (won, lost, _) = self.games_for(player)?;
        Some(match won.cmp(&lost) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}

/// The effective match log: for each match id, the last record appended wins.
/// Order follows the first appearance of each id.
pub fn effective_matches(matches: &[Match]) -> Vec<&Match> {
    let mut latest: HashMap<MatchId, usize> = HashMap::new();
    for (i, m) in matches.iter().enumerate() {
        latest.insert(m.id, i);
    }
    let mut seen = HashSet::new();
    matches
        .iter()
        .filter(|m| seen.insert(m.id))
        .map(|m| &matches[latest[&m.id]])
        .collect()
}
