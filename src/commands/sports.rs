//! Sports command implementation

use crate::{config::SportTable, rankings::ZeroPolicy, Result};

use super::common::print_json;

/// One block of text per configured sport
pub fn format_sport_table(table: &SportTable) -> Vec<String> {
    let mut lines = Vec::new();

    for (sport, settings) in &table.sports {
        let points = settings.points;
        lines.push(format!(
            "{}: win {} / draw {} / loss {}",
            sport, points.win, points.draw, points.loss
        ));
        if !settings.breakdown_fields.is_empty() {
            lines.push(format!("  breakdown: {}", settings.breakdown_fields.join(", ")));
        }
        for category in &settings.categories {
            let direction = if category.is_higher_better { "most" } else { "fewest" };
            lines.push(format!(
                "  {:<16} {} {} ({})",
                category.key, direction, category.stat_key, category.label
            ));
        }
    }

    lines.push(format!(
        "leaderboards: top {}, zero values {}",
        table.ranking.top_n,
        match table.ranking.zero_policy {
            ZeroPolicy::ExcludeZero => "excluded",
            ZeroPolicy::Keep => "kept",
        }
    ));
    lines
}

/// Handle the sports command
pub fn handle_sports(table: &SportTable, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(table);
    }
    for line in format_sport_table(table) {
        println!("{}", line);
    }
    Ok(())
}
