//! Tiebreaker calculators: percentage metrics derived from the full match log.
//!
//! Every percentage is a fraction in `[0, 1]`, floored by the configured minimum so a
//! player with an early zero-win record isn't buried. Opponent metrics average the
//! opponents' own floored values; byes never count as an opponent.

use crate::models::{Match, Outcome, PlayerId, SwissConfig};
use std::collections::BTreeSet;

/// Record of one player aggregated over every reported match they took part in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub game_wins: u32,
    pub game_losses: u32,
    pub game_draws: u32,
    pub matches_played: u32,
    pub bye_count: u32,
    pub opponents: BTreeSet<PlayerId>,
}

impl PlayerRecord {
    /// Aggregate `player`'s reported matches. Unreported matches are skipped.
    pub fn collect(player: PlayerId, matches: &[&Match]) -> Self {
        let mut record = Self::default();
        for m in matches.iter().filter(|m| m.involves(player)) {
            let (Some(outcome), Some((won, lost, drawn))) =
                (m.outcome_for(player), m.games_for(player))
            else {
                continue;
            };
            match outcome {
                Outcome::Win => record.wins += 1,
                Outcome::Loss => record.losses += 1,
                Outcome::Draw => record.draws += 1,
            }
            record.game_wins += won;
            record.game_losses += lost;
            record.game_draws += drawn;
            record.matches_played += 1;
            match m.opponent_of(player) {
                Some(opponent) => {
                    record.opponents.insert(opponent);
                }
                None => record.bye_count += 1,
            }
        }
        record
    }

    pub fn match_points(&self) -> u32 {
        self.wins * Outcome::Win.match_points() + self.draws * Outcome::Draw.match_points()
    }

    fn games_played(&self) -> u32 {
        self.game_wins + self.game_losses + self.game_draws
    }
}

/// Inputs shared by every calculator for one standings computation.
pub struct TiebreakerContext<'a> {
    /// Effective (de-duplicated) match log.
    pub matches: &'a [&'a Match],
    pub config: &'a SwissConfig,
}

impl TiebreakerContext<'_> {
    fn record(&self, player: PlayerId) -> PlayerRecord {
        PlayerRecord::collect(player, self.matches)
    }
}

fn floored(numerator: u32, denominator: u32, floor: f64) -> f64 {
    if denominator == 0 {
        return floor;
    }
    (numerator as f64 / denominator as f64).max(floor)
}

/// Summed in ascending order so equal multisets give bit-identical means.
fn mean_or(values: impl Iterator<Item = f64>, fallback: f64) -> f64 {
    let mut values: Vec<f64> = values.collect();
    if values.is_empty() {
        return fallback;
    }
    values.sort_by(f64::total_cmp);
    values.iter().sum::<f64>() / values.len() as f64
}

/// MW%: match wins / matches played (byes count as wins).
pub fn match_win_percentage(player: PlayerId, ctx: &TiebreakerContext<'_>) -> f64 {
    let record = ctx.record(player);
    floored(record.wins, record.matches_played, ctx.config.match_win_floor)
}

/// GW%: game wins / games played.
pub fn game_win_percentage(player: PlayerId, ctx: &TiebreakerContext<'_>) -> f64 {
    let record = ctx.record(player);
    floored(record.game_wins, record.games_played(), ctx.config.game_win_floor)
}

/// OMW%: mean of each opponent's MW%, each raised to the OMW floor.
pub fn opponent_match_win_percentage(player: PlayerId, ctx: &TiebreakerContext<'_>) -> f64 {
    let floor = ctx.config.opponent_match_win_floor();
    let opponents = ctx.record(player).opponents;
    mean_or(
        opponents.into_iter().map(|o| match_win_percentage(o, ctx).max(floor)),
        floor,
    )
}

/// OGW%: mean of each opponent's GW%, each raised to the OGW floor.
pub fn opponent_game_win_percentage(player: PlayerId, ctx: &TiebreakerContext<'_>) -> f64 {
    let floor = ctx.config.opponent_game_win_floor();
    let opponents = ctx.record(player).opponents;
    mean_or(
        opponents.into_iter().map(|o| game_win_percentage(o, ctx).max(floor)),
        floor,
    )
}
