//! Team statistics for completed matches
//!
//! Everything in this module is a pure function of its input:
//! - `types`: match records and result shapes
//! - `points`: sport point tables and scoring rules
//! - `aggregate`: one team's record, form and recent history
//! - `standings`: league table across every team

pub mod aggregate;
pub mod points;
pub mod standings;
pub mod types;

pub use aggregate::{
    aggregate, aggregate_with_rules, goal_difference, recent_results, win_rate, FORM_LENGTH,
    RECENT_RESULTS_LENGTH,
};
pub use points::{PointTable, ScoringRules};
pub use standings::{standings, StandingRow};
pub use types::{MatchResult, MatchSummary, Outcome, ScoreBreakdown, TeamAggregateStats, TeamView, Venue};
