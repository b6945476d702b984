//! Data models for the storage layer

use crate::cli::types::{Sport, TeamId};
use crate::error::StatsError;
use crate::rankings::PlayerStatSnapshot;
use crate::stats::MatchResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a fixture. Only `Finished` matches are aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Live => "LIVE",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Postponed => "POSTPONED",
            MatchStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MatchStatus {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SCHEDULED" => Ok(MatchStatus::Scheduled),
            "LIVE" => Ok(MatchStatus::Live),
            "FINISHED" => Ok(MatchStatus::Finished),
            "POSTPONED" => Ok(MatchStatus::Postponed),
            "CANCELLED" => Ok(MatchStatus::Cancelled),
            _ => Err(StatsError::Config {
                message: format!("unknown match status {s:?}"),
            }),
        }
    }
}

/// A match row as stored: the result plus its sport and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMatch {
    pub sport: Sport,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// A roster member with the team they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub team_id: TeamId,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub snapshot: PlayerStatSnapshot,
}

fn default_active() -> bool {
    true
}
