//! Command-line front end: reads a roster and a match log from disk, prints JSON.
//! Run with: cargo run --bin swiss -- <command> ...
//!
//! The roster is a CSV with columns `player_id,sequence,status,registered_at`; the
//! match log is a JSON array of matches. Override defaults with env: SWISS_CONFIG
//! (path to a JSON config), SWISS_SEED (u64 seed for shuffles and random tiebreakers).

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::path::Path;
use swiss_pairing::{
    backfill_losses, calculate_standings, next_round_number, pair_round, seed_round_one, Match,
    PlayerId, Registration, SeedingMode, SwissConfig, SwissError,
};

const USAGE: &str = "usage:
  swiss standings <roster.csv> <matches.json>
  swiss seed <roster.csv> <random|seeded>
  swiss pair <roster.csv> <matches.json> [round]
  swiss backfill <roster.csv> <player_id> <round>";

fn read_roster(path: impl AsRef<Path>) -> Result<Vec<Registration>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut roster: Vec<Registration> = Vec::new();
    for row in reader.deserialize::<Registration>() {
        roster.push(row?);
    }
    Ok(roster)
}

fn read_matches(path: impl AsRef<Path>) -> Result<Vec<Match>, Box<dyn Error>> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn load_config() -> Result<SwissConfig, Box<dyn Error>> {
    match std::env::var("SWISS_CONFIG") {
        Ok(path) => {
            let config = SwissConfig::from_json(&fs::read_to_string(&path)?)?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
        Err(_) => Ok(SwissConfig::default()),
    }
}

fn make_rng() -> StdRng {
    match std::env::var("SWISS_SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn parse_round(s: &str) -> Result<u32, SwissError> {
    s.parse()
        .map_err(|_| SwissError::InvalidInput(format!("not a round number: {:?}", s)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let config = load_config()?;
    let mut rng = make_rng();

    match args.as_slice() {
        ["standings", roster, matches] => {
            let roster = read_roster(roster)?;
            let matches = read_matches(matches)?;
            print_json(&calculate_standings(&roster, &matches, &config, &mut rng))
        }
        ["seed", roster, mode] => {
            let roster = read_roster(roster)?;
            let mode: SeedingMode = mode.parse()?;
            print_json(&seed_round_one(&roster, mode, &mut rng)?)
        }
        ["pair", roster, matches, rest @ ..] if rest.len() <= 1 => {
            let roster = read_roster(roster)?;
            let matches = read_matches(matches)?;
            let round = match rest.first() {
                Some(r) => parse_round(r)?,
                None => next_round_number(&matches),
            };
            print_json(&pair_round(&roster, &matches, &config, round, &mut rng)?)
        }
        ["backfill", roster, player_id, round] => {
            let roster = read_roster(roster)?;
            let player_id: PlayerId = player_id.parse()?;
            let registration = roster
                .iter()
                .find(|r| r.player_id == player_id)
                .ok_or_else(|| {
                    SwissError::InvalidInput(format!("player {} not in roster", player_id))
                })?;
            print_json(&backfill_losses(registration, parse_round(round)?))
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}
