//! Club match statistics and player leaderboards
//!
//! A Rust library for turning stored match results and player statistics into
//! the numbers a club platform displays: season records, form, league tables
//! and per-category leaderboards across several sports.
//!
//! ## Features
//!
//! - **Team Aggregation**: Played/won/drawn/lost, goals, points, win rate,
//!   five-match form and clean sheets from a team's completed matches
//! - **Sport-aware Scoring**: Point tables and score breakdowns (tries,
//!   conversions, ...) looked up per sport, overridable from a config file
//! - **Player Rankings**: Stable, top-N leaderboards with higher- and
//!   lower-is-better categories, computed in parallel
//! - **League Standings**: Deterministic tables over every stored match
//! - **Database Storage**: Local SQLite store for matches and rosters
//!
//! ## Quick Start
//!
//! ```rust
//! use pitch_stats::{aggregate, MatchResult, Sport, TeamId};
//!
//! let matches: Vec<MatchResult> = serde_json::from_str(r#"[
//!     {"id": "m1", "homeTeamId": "A", "awayTeamId": "B",
//!      "homeScore": 2, "awayScore": 1, "kickOffTime": "2025-01-04T15:00:00Z"}
//! ]"#).unwrap();
//!
//! let stats = aggregate(&matches, &TeamId::new("A"), Sport::Football);
//! assert_eq!(stats.points, 3);
//! assert_eq!(stats.form_string(), "W");
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PITCH_STATS_DB=/var/lib/pitch-stats/matches.db
//! export PITCH_STATS_CONFIG=/etc/pitch-stats/sports.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod medical;
pub mod rankings;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{MatchId, PlayerId, Sport, TeamId};
pub use config::SportTable;
pub use error::{Result, StatsError};
pub use rankings::{
    leaderboards, rank, rank_with, Leaderboard, PlayerRanking, PlayerStatSnapshot, PlayerStats,
    RankingCategory, RankingOptions, StatKey, ZeroPolicy,
};
pub use stats::{
    aggregate, aggregate_with_rules, recent_results, standings, MatchResult, MatchSummary,
    Outcome, PointTable, ScoringRules, StandingRow, TeamAggregateStats,
};

pub const CONFIG_PATH_ENV_VAR: &str = "PITCH_STATS_CONFIG";
pub const DATABASE_PATH_ENV_VAR: &str = "PITCH_STATS_DB";
