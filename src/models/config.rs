//! SwissConfig: every recognized option with its default, validated once on load.

use crate::models::error::{Result, SwissError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default floor for match-win and game-win percentages.
pub const DEFAULT_FLOOR: f64 = 0.33;

/// A tiebreaker code from `standings_tiebreakers`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TiebreakerCode {
    MatchWin,
    GameWin,
    OpponentMatchWin,
    OpponentGameWin,
    Random,
    /// Unrecognized code; always evaluates to 0.0.
    Unknown(String),
}

impl TiebreakerCode {
    pub fn as_str(&self) -> &str {
        match self {
            TiebreakerCode::MatchWin => "mw",
            TiebreakerCode::GameWin => "gw",
            TiebreakerCode::OpponentMatchWin => "omw",
            TiebreakerCode::OpponentGameWin => "ogw",
            TiebreakerCode::Random => "random",
            TiebreakerCode::Unknown(code) => code,
        }
    }
}

impl From<String> for TiebreakerCode {
    fn from(code: String) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "mw" => TiebreakerCode::MatchWin,
            "gw" => TiebreakerCode::GameWin,
            "omw" => TiebreakerCode::OpponentMatchWin,
            "ogw" => TiebreakerCode::OpponentGameWin,
            "random" => TiebreakerCode::Random,
            _ => TiebreakerCode::Unknown(code),
        }
    }
}

impl From<&str> for TiebreakerCode {
    fn from(code: &str) -> Self {
        TiebreakerCode::from(code.to_string())
    }
}

impl From<TiebreakerCode> for String {
    fn from(code: TiebreakerCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for TiebreakerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_tiebreakers() -> Vec<TiebreakerCode> {
    vec![
        TiebreakerCode::OpponentMatchWin,
        TiebreakerCode::GameWin,
        TiebreakerCode::OpponentGameWin,
    ]
}

fn default_floor() -> f64 {
    DEFAULT_FLOOR
}

/// Standings and pairing configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwissConfig {
    /// Applied in order after match points.
    #[serde(default = "default_tiebreakers")]
    pub standings_tiebreakers: Vec<TiebreakerCode>,
    #[serde(default = "default_floor", alias = "mw_floor")]
    pub match_win_floor: f64,
    #[serde(default = "default_floor", alias = "gw_floor")]
    pub game_win_floor: f64,
    /// Floor for OMW%; falls back to `match_win_floor` when unset.
    #[serde(default, alias = "omw_floor", skip_serializing_if = "Option::is_none")]
    pub opponent_match_win_floor: Option<f64>,
    /// Floor for OGW%; falls back to `game_win_floor` when unset.
    #[serde(default, alias = "ogw_floor", skip_serializing_if = "Option::is_none")]
    pub opponent_game_win_floor: Option<f64>,
}

impl Default for SwissConfig {
    fn default() -> Self {
        Self {
            standings_tiebreakers: default_tiebreakers(),
            match_win_floor: DEFAULT_FLOOR,
            game_win_floor: DEFAULT_FLOOR,
            opponent_match_win_floor: None,
            opponent_game_win_floor: None,
        }
    }
}

impl SwissConfig {
    /// Same defaults with a different tiebreaker chain.
    pub fn with_tiebreakers<I, C>(codes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TiebreakerCode>,
    {
        Self {
            standings_tiebreakers: codes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a JSON config object and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn opponent_match_win_floor(&self) -> f64 {
        self.opponent_match_win_floor.unwrap_or(self.match_win_floor)
    }

    pub fn opponent_game_win_floor(&self) -> f64 {
        self.opponent_game_win_floor.unwrap_or(self.game_win_floor)
    }

    /// Floors must be finite fractions in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, floor) in [
            ("match_win_floor", self.match_win_floor),
            ("game_win_floor", self.game_win_floor),
            ("opponent_match_win_floor", self.opponent_match_win_floor()),
            ("opponent_game_win_floor", self.opponent_game_win_floor()),
        ] {
            if !floor.is_finite() || !(0.0..=1.0).contains(&floor) {
                return Err(SwissError::InvalidInput(format!(
                    "{} must be between 0 and 1 (got {})",
                    name, floor
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for SwissConfig {
    type Err = SwissError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}
