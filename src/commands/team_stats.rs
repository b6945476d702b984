//! Team statistics command implementation
//!
//! Loads a team's most recent finished matches and aggregates them into the
//! season record shown on the team page, together with the short history of
//! recent results.

use serde::Serialize;

use crate::{
    cli::types::{Sport, TeamId},
    stats::{
        aggregate_with_rules, recent_results, MatchSummary, TeamAggregateStats,
        RECENT_RESULTS_LENGTH,
    },
    Result,
};

use super::common::{print_json, CommandContext};

/// Everything the team page needs in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub team_id: TeamId,
    pub sport: Sport,
    pub stats: TeamAggregateStats,
    pub recent_results: Vec<MatchSummary>,
}

/// Build the report for `team_id` from at most `limit` finished matches
pub fn team_report(
    ctx: &CommandContext,
    team_id: &TeamId,
    sport: Sport,
    limit: usize,
) -> Result<TeamReport> {
    let matches = ctx.db.finished_matches_for_team(team_id, sport, limit)?;
    let rules = ctx.sports.scoring_rules(sport);

    Ok(TeamReport {
        team_id: team_id.clone(),
        sport,
        stats: aggregate_with_rules(&matches, team_id, &rules),
        recent_results: recent_results(&matches, team_id, RECENT_RESULTS_LENGTH),
    })
}

/// Render a report as text lines
pub fn format_team_report(report: &TeamReport) -> Vec<String> {
    let stats = &report.stats;
    let mut lines = vec![
        format!("{} ({})", report.team_id, report.sport),
        format!(
            "Played {}  W {}  D {}  L {}  Win rate {}%",
            stats.played, stats.wins, stats.draws, stats.losses, stats.win_rate
        ),
        format!(
            "Goals {}-{} (GD {:+})  Clean sheets {}  Points {}",
            stats.goals_for,
            stats.goals_against,
            stats.goal_difference,
            stats.clean_sheets,
            stats.points
        ),
        format!("Form {}", stats.form_string()),
    ];

    if let Some(sport_stats) = &stats.sport_stats {
        let parts: Vec<String> = sport_stats
            .iter()
            .map(|(field, total)| format!("{} {}", field, total))
            .collect();
        lines.push(parts.join("  "));
    }

    if !report.recent_results.is_empty() {
        lines.push("Recent results:".to_string());
        for summary in &report.recent_results {
            lines.push(format!(
                "  {} {} {} {}-{} vs {}",
                summary.kick_off_time.format("%Y-%m-%d"),
                summary.outcome,
                summary.venue,
                summary.team_score,
                summary.opponent_score,
                summary.opponent_id
            ));
        }
    }

    lines
}

/// Handle the team-stats command
pub fn handle_team_stats(
    ctx: &CommandContext,
    team_id: &TeamId,
    sport: Sport,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let report = team_report(ctx, team_id, sport, limit)?;

    if as_json {
        return print_json(&report);
    }

    if report.stats.played == 0 {
        println!("No finished {} matches found for {}", sport, team_id);
        return Ok(());
    }

    for line in format_team_report(&report) {
        println!("{}", line);
    }
    Ok(())
}
