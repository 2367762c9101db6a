//! Late entries: synthetic losses for the rounds a player missed.

use crate::models::{Match, Registration};

/// One bye-style loss (0 game wins against an absent opponent) for every round
/// before `current_round`. Append these to the match log once, when the player
/// registers, before the next pairing call.
pub fn backfill_losses(registration: &Registration, current_round: u32) -> Vec<Match> {
    let missed: Vec<Match> = (1..current_round)
        .map(|round| Match::bye_loss(round, registration.player_id))
        .collect();
    if !missed.is_empty() {
        log::info!(
            "Late entry {} (#{}): backfilled {} loss(es) before round {}",
            registration.player_id,
            registration.sequence,
            missed.len(),
            current_round
        );
    }
    missed
}
