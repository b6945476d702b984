//! Player leaderboards
//!
//! - `types`: statistic keys, roster snapshots, categories and results
//! - `categories`: the built-in category list for each sport
//! - `engine`: sorting and truncation into ranked leaderboards

pub mod categories;
pub mod engine;
pub mod types;

pub use categories::builtin_categories;
pub use engine::{leaderboards, rank, rank_with};
pub use types::{
    Leaderboard, PlayerRanking, PlayerStatSnapshot, PlayerStats, RankingCategory, RankingOptions,
    StatKey, ZeroPolicy, DEFAULT_TOP_N,
};
