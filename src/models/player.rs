//! Registration: a participant's entry in the event, owned by the external roster.

use crate::models::error::{Result, SwissError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Whether a registration takes part in the next round.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Active,
    Dropped,
    /// Registered after round 1; becomes active once missed rounds are backfilled.
    LateEntryPending,
}

/// A player's registration. Read-only input for the engine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub player_id: PlayerId,
    /// Monotonically assigned at registration; used for seeded pairing and final tie-breaks.
    pub sequence: u32,
    #[serde(default)]
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Create an active registration with a fresh player id.
    pub fn new(sequence: u32) -> Self {
        Self::for_player(Uuid::new_v4(), sequence)
    }

    /// Create an active registration for an existing player id.
    pub fn for_player(player_id: PlayerId, sequence: u32) -> Self {
        Self {
            player_id,
            sequence,
            status: RegistrationStatus::Active,
            registered_at: Utc::now(),
        }
    }

    pub fn with_status(self, status: RegistrationStatus) -> Self {
        Self { status, ..self }
    }

    pub fn is_active(&self) -> bool {
        self.status == RegistrationStatus::Active
    }
}

/// Active registrations of a roster, in roster order.
///
/// Fails on an empty roster, a roster with nobody active, or an active player
/// registered more than once.
pub fn active_players(players: &[Registration]) -> Result<Vec<&Registration>> {
    if players.is_empty() {
        return Err(SwissError::InvalidInput("cannot pair an empty roster".into()));
    }
    let active: Vec<&Registration> = players.iter().filter(|p| p.is_active()).collect();
    if active.is_empty() {
        return Err(SwissError::InvalidInput("no active players to pair".into()));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = active.iter().find(|p| !seen.insert(p.player_id)) {
        return Err(SwissError::InvalidInput(format!(
            "player {} is registered more than once",
            dup.player_id
        )));
    }
    Ok(active)
}
