//! CLI argument definitions and parsing.

pub mod types;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use types::{Sport, TeamId};

/// Team and sport selection shared by the per-team commands
#[derive(Debug, Args)]
pub struct TeamSelection {
    /// Team identifier as stored in the database.
    #[clap(long, short)]
    pub team: TeamId,

    /// Sport the team plays (e.g. football, rugby, netball).
    #[clap(long, short)]
    pub sport: Sport,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load matches and roster players from JSON files into the database
    Import {
        /// JSON array of matches (sport, status, scores, kickOffTime, ...).
        #[clap(long)]
        matches: Option<PathBuf>,

        /// JSON array of roster players (teamId, playerId, name, stats, ...).
        #[clap(long)]
        players: Option<PathBuf>,

        /// Clear all stored data before importing.
        #[clap(long)]
        clear: bool,
    },

    /// Aggregate a team's finished matches into season statistics
    ///
    /// Reads the most recent finished matches newest-first and prints the
    /// record, goal totals, points, form and the last five results.
    TeamStats {
        #[clap(flatten)]
        selection: TeamSelection,

        /// Maximum number of recent finished matches to aggregate.
        #[clap(long, default_value_t = crate::storage::DEFAULT_MATCH_LIMIT)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank a team's roster in every leaderboard category for its sport
    Rankings {
        #[clap(flatten)]
        selection: TeamSelection,

        /// Entries per leaderboard (defaults to the configured top N).
        #[clap(long)]
        top: Option<NonZeroUsize>,

        /// Keep players whose value is zero in higher-is-better categories.
        #[clap(long)]
        keep_zero: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// League table over every stored finished match of a sport
    Standings {
        /// Sport to build the table for.
        #[clap(long, short)]
        sport: Sport,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the effective point tables and leaderboard categories
    Sports {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Bucket a model risk score and list workload recommendations
    InjuryRisk {
        /// Injury probability in [0, 1] produced by the risk model.
        #[clap(long)]
        risk: f64,

        /// Normalised training load (above 0.8 is considered heavy).
        #[clap(long)]
        training_load: Option<f64>,

        /// Average nightly sleep in hours.
        #[clap(long)]
        sleep_hours: Option<f64>,

        /// Number of previous injuries on record.
        #[clap(long)]
        previous_injuries: Option<u32>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "pitch-stats", about = "Club match statistics and player leaderboards")]
pub struct PitchStats {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Database file (or set `PITCH_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
