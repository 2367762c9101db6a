//! Shared builders for the integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use swiss_pairing::{Match, MatchResult, PlayerId, Registration};

/// `n` active registrations with sequence numbers 1..=n.
pub fn roster(n: u32) -> Vec<Registration> {
    (1..=n).map(Registration::new).collect()
}

/// Player id of the registration with this sequence number.
pub fn id(roster: &[Registration], sequence: u32) -> PlayerId {
    roster
        .iter()
        .find(|r| r.sequence == sequence)
        .map(|r| r.player_id)
        .unwrap_or_else(|| panic!("no registration #{sequence}"))
}

/// Sequence number of a player id.
pub fn seq(roster: &[Registration], player: PlayerId) -> u32 {
    roster
        .iter()
        .find(|r| r.player_id == player)
        .map(|r| r.sequence)
        .unwrap_or_else(|| panic!("unknown player {player}"))
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A reported match between two players.
pub fn played(round: u32, a: PlayerId, b: PlayerId, a_wins: u32, b_wins: u32) -> Match {
    Match::new(round, a, b, 1).with_result(MatchResult::new(a_wins, b_wins, 0))
}

/// Report every non-bye match as a 2-0 for player 1.
pub fn report_player_1_wins(matches: Vec<Match>) -> Vec<Match> {
    matches
        .into_iter()
        .map(|m| if m.is_bye() { m } else { m.with_result(MatchResult::new(2, 0, 0)) })
        .collect()
}

/// Report every non-bye match as a 2-0 for the lower sequence number.
pub fn report_lower_sequence_wins(roster: &[Registration], matches: Vec<Match>) -> Vec<Match> {
    matches
        .into_iter()
        .map(|m| match m.player_2 {
            None => m,
            Some(p2) if seq(roster, m.player_1) < seq(roster, p2) => {
                m.with_result(MatchResult::new(2, 0, 0))
            }
            Some(_) => m.with_result(MatchResult::new(0, 2, 0)),
        })
        .collect()
}

/// Sequence pairs `(a, b)` with a < b for every non-bye match.
pub fn pairs_by_sequence(roster: &[Registration], matches: &[Match]) -> Vec<(u32, u32)> {
    matches
        .iter()
        .filter_map(|m| {
            let (a, b) = (seq(roster, m.player_1), seq(roster, m.player_2?));
            Some((a.min(b), a.max(b)))
        })
        .collect()
}

/// Sequence numbers of every player appearing in `matches`, sorted.
pub fn players_covered(roster: &[Registration], matches: &[Match]) -> Vec<u32> {
    let mut covered: Vec<u32> = matches
        .iter()
        .flat_map(|m| std::iter::once(m.player_1).chain(m.player_2))
        .map(|p| seq(roster, p))
        .collect();
    covered.sort_unstable();
    covered
}
