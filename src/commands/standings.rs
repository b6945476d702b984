//! Standings command implementation

use crate::{
    cli::types::Sport,
    stats::{standings, StandingRow},
    Result,
};

use super::common::{print_json, CommandContext};

/// League table over every stored finished match of `sport`
pub fn league_table(ctx: &CommandContext, sport: Sport) -> Result<Vec<StandingRow>> {
    let matches = ctx.db.finished_matches_for_sport(sport)?;
    Ok(standings(&matches, &ctx.sports.scoring_rules(sport)))
}

/// Render the table with a header line
pub fn format_standings(rows: &[StandingRow]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}  {}",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form"
    )];

    for row in rows {
        let s = &row.stats;
        lines.push(format!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}  {}",
            row.position,
            row.team_id.as_str(),
            s.played,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            s.goal_difference,
            s.points,
            s.form_string()
        ));
    }
    lines
}

/// Handle the standings command
pub fn handle_standings(ctx: &CommandContext, sport: Sport, as_json: bool) -> Result<()> {
    let rows = league_table(ctx, sport)?;

    if as_json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No finished {} matches stored", sport);
        return Ok(());
    }

    for line in format_standings(&rows) {
        println!("{}", line);
    }
    Ok(())
}
