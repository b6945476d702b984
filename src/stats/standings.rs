//! League table derived from completed matches

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::cli::types::TeamId;

use super::{
    aggregate::aggregate_views,
    points::ScoringRules,
    types::{MatchResult, TeamAggregateStats, TeamView},
};

/// A team's line in the league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    /// 1-based table position.
    pub position: usize,
    pub team_id: TeamId,
    #[serde(flatten)]
    pub stats: TeamAggregateStats,
}

/// Build the table for every team appearing in a completed match.
///
/// Ordered by points, then goal difference, then goals scored (all
/// descending), then team id so equal records always come out the same way.
pub fn standings(matches: &[MatchResult], rules: &ScoringRules) -> Vec<StandingRow> {
    let completed: Vec<&MatchResult> = matches
        .iter()
        .filter(|m| m.final_score().is_some())
        .collect();

    let skipped = matches.len() - completed.len();
    if skipped > 0 {
        debug!(skipped, "ignoring matches without a final score");
    }

    let teams: BTreeSet<&TeamId> = completed
        .iter()
        .flat_map(|m| [&m.home_team_id, &m.away_team_id])
        .collect();

    let mut rows: Vec<(TeamId, TeamAggregateStats)> = teams
        .into_iter()
        .map(|team_id| {
            let mut views: Vec<TeamView<'_>> = completed
                .iter()
                .filter_map(|m| m.view_for(team_id))
                .collect();
            views.sort_by(|a, b| b.kick_off_time.cmp(&a.kick_off_time));
            (team_id.clone(), aggregate_views(&views, rules))
        })
        .collect();

    rows.sort_by(|(team_a, a), (team_b, b)| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(team_a.cmp(team_b))
    });

    rows.into_iter()
        .enumerate()
        .map(|(index, (team_id, stats))| StandingRow {
            position: index + 1,
            team_id,
            stats,
        })
        .collect()
}
