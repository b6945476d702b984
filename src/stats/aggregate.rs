//! Team record aggregation over completed matches

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::cli::types::{Sport, TeamId};

use super::{
    points::ScoringRules,
    types::{MatchResult, MatchSummary, Outcome, TeamAggregateStats, TeamView},
};


/// Number of outcomes kept in `form`.
pub const FORM_LENGTH: usize = 5;

/// Number of matches shown in a team's recent history.
pub const RECENT_RESULTS_LENGTH: usize = 5;

/// Aggregate `team_id`'s record using the built-in rules for `sport`.
///
/// Never fails: matches that do not involve the team or lack a final score
/// are skipped, and an empty input yields an all-zero record.
pub fn aggregate(matches: &[MatchResult], team_id: &TeamId, sport: Sport) -> TeamAggregateStats {
    aggregate_with_rules(matches, team_id, &ScoringRules::builtin(sport))
}

/// Aggregate `team_id`'s record with explicit scoring rules.
pub fn aggregate_with_rules(
    matches: &[MatchResult],
    team_id: &TeamId,
    rules: &ScoringRules,
) -> TeamAggregateStats {
    aggregate_views(&completed_views(matches, team_id), rules)
}

/// The last `limit` completed matches for `team_id`, newest first.
pub fn recent_results(matches: &[MatchResult], team_id: &TeamId, limit: usize) -> Vec<MatchSummary> {
    completed_views(matches, team_id)
        .iter()
        .take(limit)
        .map(TeamView::to_summary)
        .collect()
}

/// Team-relative views of every completed match involving `team_id`,
/// sorted newest first. Ties keep input order.
pub(crate) fn completed_views<'a>(matches: &'a [MatchResult], team_id: &TeamId) -> Vec<TeamView<'a>> {
    let mut views: Vec<TeamView<'a>> = matches
        .iter()
        .filter_map(|m| {
            if m.venue_of(team_id).is_none() {
                warn!(match_id = %m.id, team_id = %team_id, "skipping match that does not involve team");
                return None;
            }
            let view = m.view_for(team_id);
            if view.is_none() {
                debug!(match_id = %m.id, "skipping match without a final score");
            }
            view
        })
        .collect();

    views.sort_by(|a, b| b.kick_off_time.cmp(&a.kick_off_time));
    views
}

/// Fold already-sorted views into a record.
pub(crate) fn aggregate_views(views: &[TeamView<'_>], rules: &ScoringRules) -> TeamAggregateStats {
    let mut stats = TeamAggregateStats::default();
    let mut sport_stats: BTreeMap<String, u32> = BTreeMap::new();

    for view in views {
        stats.played += 1;
        stats.goals_for += u64::from(view.team_score);
        stats.goals_against += u64::from(view.opponent_score);

        match view.outcome() {
            Outcome::Win => stats.wins += 1,
            Outcome::Draw => stats.draws += 1,
            Outcome::Loss => stats.losses += 1,
        }

        if view.opponent_score == 0 {
            stats.clean_sheets += 1;
        }

        if let Some(breakdown) = view.breakdown {
            for field in &rules.breakdown_fields {
                if let Some(value) = breakdown.get(field) {
                    let total = sport_stats.entry(field.clone()).or_insert(0);
                    *total = total.saturating_add(*value);
                }
            }
        }
    }

    stats.goal_difference = goal_difference(stats.goals_for, stats.goals_against);
    stats.points = rules.points.points(stats.wins, stats.draws, stats.losses);
    stats.win_rate = win_rate(stats.wins, stats.played);
    stats.form = views
        .iter()
        .take(FORM_LENGTH)
        .map(TeamView::outcome)
        .collect();
    stats.sport_stats = (!sport_stats.is_empty()).then_some(sport_stats);

    stats
}

/// `goals_for - goals_against`, saturating at the `i64` bounds.
pub fn goal_difference(goals_for: u64, goals_against: u64) -> i64 {
    let diff = i128::from(goals_for) - i128::from(goals_against);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

/// `round(wins / played * 100)`, zero when nothing has been played.
pub fn win_rate(wins: u32, played: u32) -> u32 {
    if played == 0 {
        return 0;
    }
    (f64::from(wins) / f64::from(played) * 100.0).round() as u32
}
