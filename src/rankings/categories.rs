//! Built-in leaderboard categories per sport

use crate::cli::types::Sport;

use super::types::{RankingCategory, StatKey};

struct CategoryDef {
    key: &'static str,
    stat: StatKey,
    label: &'static str,
    unit: &'static str,
    icon: &'static str,
    higher_is_better: bool,
}

const fn top(
    key: &'static str,
    stat: StatKey,
    label: &'static str,
    unit: &'static str,
    icon: &'static str,
) -> CategoryDef {
    CategoryDef {
        key,
        stat,
        label,
        unit,
        icon,
        higher_is_better: true,
    }
}

const fn fewest(
    key: &'static str,
    stat: StatKey,
    label: &'static str,
    unit: &'static str,
    icon: &'static str,
) -> CategoryDef {
    CategoryDef {
        key,
        stat,
        label,
        unit,
        icon,
        higher_is_better: false,
    }
}

const FOOTBALL: &[CategoryDef] = &[
    top("topScorers", StatKey::Goals, "Top Scorers", "goals", "⚽"),
    top("topAssists", StatKey::Assists, "Most Assists", "assists", "🅰️"),
    top("cleanSheets", StatKey::CleanSheets, "Clean Sheets", "clean sheets", "🧤"),
    top("mostAppearances", StatKey::Appearances, "Most Appearances", "apps", "👕"),
    top("mostMinutes", StatKey::MinutesPlayed, "Most Minutes", "mins", "⏱️"),
    fewest("fairPlay", StatKey::YellowCards, "Fair Play", "yellow cards", "🟨"),
];

const RUGBY: &[CategoryDef] = &[
    top("topTries", StatKey::Tries, "Top Try Scorers", "tries", "🏉"),
    top("topConversions", StatKey::Conversions, "Most Conversions", "conversions", "🎯"),
    top("topPenalties", StatKey::Penalties, "Most Penalties", "penalties", "🥅"),
    top("topTacklers", StatKey::Tackles, "Most Tackles", "tackles", "💪"),
    top("mostAppearances", StatKey::Appearances, "Most Appearances", "apps", "👕"),
];

const CRICKET: &[CategoryDef] = &[
    top("topRunScorers", StatKey::Runs, "Top Run Scorers", "runs", "🏏"),
    top("topWicketTakers", StatKey::Wickets, "Top Wicket Takers", "wickets", "🎳"),
    top("topCatches", StatKey::Catches, "Most Catches", "catches", "🧤"),
    top("mostAppearances", StatKey::Appearances, "Most Appearances", "apps", "👕"),
];

const BASKETBALL: &[CategoryDef] = &[
    top("topPoints", StatKey::Points, "Top Points", "pts", "🏀"),
    top("topRebounds", StatKey::Rebounds, "Most Rebounds", "reb", "🙌"),
    top("topAssists", StatKey::Assists, "Most Assists", "ast", "🅰️"),
    top("topSteals", StatKey::Steals, "Most Steals", "stl", "🖐️"),
];

const NETBALL: &[CategoryDef] = &[
    top("topScorers", StatKey::Goals, "Top Goal Scorers", "goals", "🏐"),
    top("topAssists", StatKey::Assists, "Most Goal Assists", "assists", "🅰️"),
    top("topInterceptions", StatKey::Interceptions, "Most Interceptions", "int", "✋"),
];

const HOCKEY: &[CategoryDef] = &[
    top("topScorers", StatKey::Goals, "Top Scorers", "goals", "🏑"),
    top("topAssists", StatKey::Assists, "Most Assists", "assists", "🅰️"),
    top("topSaves", StatKey::Saves, "Most Saves", "saves", "🧤"),
    top("mostAppearances", StatKey::Appearances, "Most Appearances", "apps", "👕"),
];

const AMERICAN_FOOTBALL: &[CategoryDef] = &[
    top("topTouchdowns", StatKey::Touchdowns, "Most Touchdowns", "TD", "🏈"),
    top("topPassers", StatKey::PassingYards, "Passing Yards", "yds", "🎯"),
    top("topTacklers", StatKey::Tackles, "Most Tackles", "tackles", "💪"),
    top("topInterceptions", StatKey::Interceptions, "Most Interceptions", "int", "✋"),
];

static BUILTIN_CATEGORIES: &[(Sport, &[CategoryDef])] = &[
    (Sport::Football, FOOTBALL),
    (Sport::Futsal, FOOTBALL),
    (Sport::Rugby, RUGBY),
    (Sport::Cricket, CRICKET),
    (Sport::Basketball, BASKETBALL),
    (Sport::Netball, NETBALL),
    (Sport::Hockey, HOCKEY),
    (Sport::AmericanFootball, AMERICAN_FOOTBALL),
];

/// Ordered leaderboard categories shipped for `sport`.
pub fn builtin_categories(sport: Sport) -> Vec<RankingCategory> {
    BUILTIN_CATEGORIES
        .iter()
        .find(|(s, _)| *s == sport)
        .map(|(_, defs)| {
            defs.iter()
                .map(|def| RankingCategory {
                    key: def.key.to_string(),
                    stat_key: def.stat,
                    is_higher_better: def.higher_is_better,
                    label: def.label.to_string(),
                    unit: def.unit.to_string(),
                    icon: Some(def.icon.to_string()),
                })
                .collect()
        })
        .unwrap_or_default()
}
