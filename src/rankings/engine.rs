//! Leaderboard ranking over roster snapshots

use rayon::prelude::*;
use tracing::debug;

use super::types::{
    Leaderboard, PlayerRanking, PlayerStatSnapshot, RankingCategory, RankingOptions, ZeroPolicy,
};


/// Rank `players` for one category with the default options
/// (top 10, zero values excluded).
pub fn rank(players: &[PlayerStatSnapshot], category: &RankingCategory) -> Vec<PlayerRanking> {
    rank_with(players, category, &RankingOptions::default())
}

/// Rank `players` for one category.
///
/// Sorting is stable: players with equal values keep their roster order.
pub fn rank_with(
    players: &[PlayerStatSnapshot],
    category: &RankingCategory,
    options: &RankingOptions,
) -> Vec<PlayerRanking> {
    let drop_zero = category.is_higher_better && options.zero_policy == ZeroPolicy::ExcludeZero;

    let mut entries: Vec<(&PlayerStatSnapshot, f64)> = players
        .iter()
        .map(|player| (player, player.stats.get(category.stat_key)))
        .filter(|(_, value)| !drop_zero || *value > 0.0)
        .collect();

    if category.is_higher_better {
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    } else {
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
    }
    entries.truncate(options.top_n);

    debug!(
        category = %category.key,
        eligible = entries.len(),
        roster = players.len(),
        "ranked category"
    );

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (player, value))| PlayerRanking::new(index + 1, player, value))
        .collect()
}

/// One leaderboard per category, in category order.
///
/// Categories are independent, so they are ranked in parallel.
pub fn leaderboards(
    players: &[PlayerStatSnapshot],
    categories: &[RankingCategory],
    options: &RankingOptions,
) -> Vec<Leaderboard> {
    categories
        .par_iter()
        .map(|category| Leaderboard {
            category: category.clone(),
            rankings: rank_with(players, category, options),
        })
        .collect()
}
