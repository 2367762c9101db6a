//! Standings: aggregate records, evaluate the tiebreaker chain, sort and rank.

use crate::logic::tiebreakers::{self, PlayerRecord, TiebreakerContext};
use crate::models::{
    effective_matches, Match, PlayerId, Registration, StandingsEntry, SwissConfig, TiebreakerCode,
};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Computes standings for one config. Holds no state between calls.
#[derive(Clone, Debug)]
pub struct StandingsEngine<'a> {
    config: &'a SwissConfig,
}

impl<'a> StandingsEngine<'a> {
    pub fn new(config: &'a SwissConfig) -> Self {
        Self { config }
    }

    fn evaluate<R: Rng + ?Sized>(
        &self,
        code: &TiebreakerCode,
        player: PlayerId,
        ctx: &TiebreakerContext<'_>,
        rng: &mut R,
    ) -> f64 {
        match code {
            TiebreakerCode::MatchWin => tiebreakers::match_win_percentage(player, ctx),
            TiebreakerCode::GameWin => tiebreakers::game_win_percentage(player, ctx),
            TiebreakerCode::OpponentMatchWin => {
                tiebreakers::opponent_match_win_percentage(player, ctx)
            }
            TiebreakerCode::OpponentGameWin => {
                tiebreakers::opponent_game_win_percentage(player, ctx)
            }
            TiebreakerCode::Random => rng.gen::<f64>(),
            TiebreakerCode::Unknown(_) => 0.0,
        }
    }

    /// Rank `players` by match points, then each configured tiebreaker in order.
    ///
    /// Remaining ties fall back to registration sequence (lower first), so the order
    /// does not depend on the order of `players`. Ranks are 1..=players.len().
    pub fn calculate<R: Rng + ?Sized>(
        &self,
        players: &[Registration],
        matches: &[Match],
        rng: &mut R,
    ) -> Vec<StandingsEntry> {
        let effective = effective_matches(matches);
        let ctx = TiebreakerContext {
            matches: &effective,
            config: self.config,
        };

        for code in &self.config.standings_tiebreakers {
            if let TiebreakerCode::Unknown(name) = code {
                log::warn!("Unknown tiebreaker code {:?}; treating it as 0.0", name);
            }
        }

        let mut standings: Vec<StandingsEntry> = players
            .iter()
            .map(|registration| {
                let player = registration.player_id;
                let record = PlayerRecord::collect(player, &effective);
                let tiebreakers: BTreeMap<String, f64> = self
                    .config
                    .standings_tiebreakers
                    .iter()
                    .map(|code| {
                        let value = self.evaluate(code, player, &ctx, &mut *rng);
                        (code.to_string(), value)
                    })
                    .collect();
                StandingsEntry {
                    registration: registration.clone(),
                    rank: 0,
                    wins: record.wins,
                    losses: record.losses,
                    draws: record.draws,
                    match_points: record.match_points(),
                    game_wins: record.game_wins,
                    game_losses: record.game_losses,
                    game_draws: record.game_draws,
                    tiebreakers,
                    matches_played: record.matches_played,
                    bye_count: record.bye_count,
                    opponents_faced: record.opponents,
                }
            })
            .collect();

        standings.sort_by(|a, b| self.compare(a, b));
        for (i, entry) in standings.iter_mut().enumerate() {
            entry.rank = i as u32 + 1;
        }
        log::debug!(
            "Computed standings for {} player(s) over {} match(es)",
            standings.len(),
            effective.len()
        );
        standings
    }

    /// Descending by match points and tiebreakers, then ascending by sequence.
    fn compare(&self, a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
        b.match_points
            .cmp(&a.match_points)
            .then_with(|| {
                self.config
                    .standings_tiebreakers
                    .iter()
                    .map(|code| {
                        let code = code.as_str();
                        b.tiebreaker(code).total_cmp(&a.tiebreaker(code))
                    })
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.registration.sequence.cmp(&b.registration.sequence))
            .then_with(|| a.registration.player_id.cmp(&b.registration.player_id))
    }
}

/// Convenience wrapper: standings for `players` under `config`.
pub fn calculate_standings<R: Rng + ?Sized>(
    players: &[Registration],
    matches: &[Match],
    config: &SwissConfig,
    rng: &mut R,
) -> Vec<StandingsEntry> {
    StandingsEngine::new(config).calculate(players, matches, rng)
}
