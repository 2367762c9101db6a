//! Rounds 2+: bracket pairing by match points with no rematches.
//!
//! Greedy, not backtracking: a valid global pairing may exist even when this
//! returns `PairingImpossible`. The caller decides how to recover.

use crate::logic::standings::StandingsEngine;
use crate::models::{
    active_players, effective_matches, Match, PlayerId, Registration, Result, StandingsEntry,
    SwissConfig, SwissError,
};
use rand::Rng;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Who has been paired with whom, rebuilt from the full match log on every call.
/// Byes are not opponents. Unreported matches count: the pair has already been scheduled.
#[derive(Clone, Debug, Default)]
pub struct PairingHistory {
    opponents: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl PairingHistory {
    pub fn build(matches: &[Match]) -> Self {
        let mut opponents: HashMap<PlayerId, HashSet<PlayerId>> = HashMap::new();
        for m in effective_matches(matches) {
            if let Some(p2) = m.player_2 {
                opponents.entry(m.player_1).or_default().insert(p2);
                opponents.entry(p2).or_default().insert(m.player_1);
            }
        }
        Self { opponents }
    }

    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.opponents.get(&a).is_some_and(|o| o.contains(&b))
    }

    pub fn opponents(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.opponents.get(&player).into_iter().flatten().copied()
    }
}

/// Pick the bye: lowest count of prior byes first, then the lowest-ranked among those.
fn select_bye_player(standings: &[StandingsEntry]) -> Option<&StandingsEntry> {
    let min_byes = standings.iter().map(|s| s.bye_count).min()?;
    standings.iter().rev().find(|s| s.bye_count == min_byes)
}

/// Pair one bracket (already in rank order, pair-downs included).
///
/// The highest-ranked remaining player takes the first player below them they haven't
/// played. A player with no such opponent is returned for pairing down.
fn pair_bracket<'a>(
    mut available: Vec<&'a StandingsEntry>,
    history: &PairingHistory,
    round: u32,
    match_points: u32,
) -> (Vec<(PlayerId, PlayerId)>, Vec<&'a StandingsEntry>) {
    let mut pairs = Vec::new();
    let mut carried = Vec::new();

    while !available.is_empty() {
        let player_1 = available.remove(0);
        let opponent = available
            .iter()
            .position(|p| !history.have_played(player_1.player_id(), p.player_id()));
        match opponent {
            Some(idx) => {
                let player_2 = available.remove(idx);
                log::debug!(
                    "[Round {}] Pairing: {} vs {} | bracket={} ranks={}/{}",
                    round,
                    player_1.player_id(),
                    player_2.player_id(),
                    match_points,
                    player_1.rank,
                    player_2.rank
                );
                pairs.push((player_1.player_id(), player_2.player_id()));
            }
            None => {
                log::debug!(
                    "[Round {}] Pair-down: {} (rank {}) has no unplayed opponent in bracket {}",
                    round,
                    player_1.player_id(),
                    player_1.rank,
                    match_points
                );
                carried.push(player_1);
            }
        }
    }
    (pairs, carried)
}

/// Pair `round` from current standings.
///
/// 1. Filter to active players and compute standings from `matches`.
/// 2. Odd count: give the bye first (see `select_bye_player`) and drop that player from the pool.
/// 3. Group the rest into brackets by match points, highest first.
/// 4. Pair each bracket greedily in rank order; unpairable players carry down to the next bracket.
/// 5. Anyone still unpaired after the lowest bracket -> `PairingImpossible`; nothing is returned.
/// 6. Tables are numbered in creation order; the bye (no table) is appended last.
pub fn pair_round<R: Rng + ?Sized>(
    players: &[Registration],
    matches: &[Match],
    config: &SwissConfig,
    round: u32,
    rng: &mut R,
) -> Result<Vec<Match>> {
    if round == 0 {
        return Err(SwissError::InvalidInput("round numbers start at 1".into()));
    }
    let active: Vec<Registration> = active_players(players)?.into_iter().cloned().collect();

    let standings = StandingsEngine::new(config).calculate(&active, matches, rng);
    let history = PairingHistory::build(matches);

    let bye = if standings.len() % 2 == 1 {
        select_bye_player(&standings).map(StandingsEntry::player_id)
    } else {
        None
    };

    let mut brackets: BTreeMap<u32, Vec<&StandingsEntry>> = BTreeMap::new();
    for entry in standings.iter().filter(|s| Some(s.player_id()) != bye) {
        brackets.entry(entry.match_points).or_default().push(entry);
    }

    let mut pairs: Vec<(PlayerId, PlayerId)> = Vec::new();
    let mut carried: Vec<&StandingsEntry> = Vec::new();
    for (match_points, bracket) in brackets.into_iter().rev() {
        let mut pool = std::mem::take(&mut carried);
        pool.extend(bracket);
        pool.sort_by_key(|s| s.rank);
        let (paired, unpaired) = pair_bracket(pool, &history, round, match_points);
        pairs.extend(paired);
        carried = unpaired;
    }

    if !carried.is_empty() {
        let unpaired: Vec<PlayerId> = carried.iter().map(|s| s.player_id()).collect();
        log::warn!(
            "[Round {}] Pairing impossible: {} player(s) left unpaired after the lowest bracket",
            round,
            unpaired.len()
        );
        return Err(SwissError::PairingImpossible { round, unpaired });
    }

    let mut new_matches: Vec<Match> = pairs
        .into_iter()
        .zip(1..)
        .map(|((p1, p2), table)| Match::new(round, p1, p2, table))
        .collect();
    if let Some(player) = bye {
        log::debug!("[Round {}] Pairing: {} vs BYE", round, player);
        new_matches.push(Match::bye(round, player));
    }

    log::info!(
        "Paired round {}: {} active player(s), {} match(es){}",
        round,
        standings.len(),
        new_matches.len(),
        if bye.is_some() { " including a bye" } else { "" }
    );
    Ok(new_matches)
}
