//! Rankings command implementation

use std::num::NonZeroUsize;

use tracing::debug;

use crate::{
    cli::types::{Sport, TeamId},
    rankings::{leaderboards, Leaderboard, RankingOptions, ZeroPolicy},
    Result,
};

use super::common::{format_stat_value, print_json, CommandContext};

/// Leaderboard options from config, adjusted by command-line flags
pub fn ranking_options(
    base: RankingOptions,
    top: Option<NonZeroUsize>,
    keep_zero: bool,
) -> RankingOptions {
    RankingOptions {
        top_n: top.map_or(base.top_n, NonZeroUsize::get),
        zero_policy: if keep_zero {
            ZeroPolicy::Keep
        } else {
            base.zero_policy
        },
    }
}

/// Every configured leaderboard for the roster of `team_id`
pub fn team_leaderboards(
    ctx: &CommandContext,
    team_id: &TeamId,
    sport: Sport,
    options: &RankingOptions,
) -> Result<Vec<Leaderboard>> {
    let roster = ctx.db.roster_snapshots(team_id)?;
    debug!(team_id = %team_id, players = roster.len(), "loaded roster");
    Ok(leaderboards(&roster, ctx.sports.categories(sport), options))
}

/// Render one leaderboard as text lines
pub fn format_leaderboard(board: &Leaderboard) -> Vec<String> {
    let category = &board.category;
    let mut lines = vec![format!("{} ({})", category.label, category.key)];

    if board.rankings.is_empty() {
        lines.push("  no eligible players".to_string());
        return lines;
    }

    for entry in &board.rankings {
        let jersey = entry
            .jersey_number
            .map(|n| format!("#{} ", n))
            .unwrap_or_default();
        let unit = if category.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", category.unit)
        };
        lines.push(format!(
            "  {:>2}. {}{}  {}{}",
            entry.rank,
            jersey,
            entry.name,
            format_stat_value(entry.stat_value),
            unit
        ));
    }
    lines
}

/// Handle the rankings command
pub fn handle_rankings(
    ctx: &CommandContext,
    team_id: &TeamId,
    sport: Sport,
    top: Option<NonZeroUsize>,
    keep_zero: bool,
    as_json: bool,
) -> Result<()> {
    let options = ranking_options(ctx.sports.ranking, top, keep_zero);
    let boards = team_leaderboards(ctx, team_id, sport, &options)?;

    if as_json {
        return print_json(&boards);
    }

    for board in &boards {
        for line in format_leaderboard(board) {
            println!("{}", line);
        }
    }
    Ok(())
}
