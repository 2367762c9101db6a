//! Round bookkeeping the orchestrator asks about between rounds.

use crate::models::{effective_matches, Match};

/// True when `round` has at least one match and every one has a reported result.
pub fn is_round_complete(matches: &[Match], round: u32) -> bool {
    let mut round_matches = effective_matches(matches)
        .into_iter()
        .filter(|m| m.round == round)
        .peekable();
    round_matches.peek().is_some() && round_matches.all(Match::is_reported)
}

/// One past the highest round in the log (1 when nothing has been played).
pub fn next_round_number(matches: &[Match]) -> u32 {
    matches.iter().map(|m| m.round).max().map_or(1, |r| r + 1)
}
