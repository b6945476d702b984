//! Player statistic snapshots and leaderboard shapes

use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every statistic a roster snapshot can carry.
///
/// Serialized in camelCase (`minutesPlayed`, `yellowCards`, ...) to match the
/// field names used by the persistence layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum StatKey {
    Appearances,
    MinutesPlayed,
    Goals,
    Assists,
    CleanSheets,
    Saves,
    YellowCards,
    RedCards,
    Tries,
    Conversions,
    Penalties,
    DropGoals,
    Tackles,
    Runs,
    Wickets,
    Catches,
    Points,
    Rebounds,
    Steals,
    Interceptions,
    Touchdowns,
    PassingYards,
}

/// Named statistic values for one player. Absent keys read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerStats(BTreeMap<StatKey, f64>);

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`; missing, negative or non-finite values read as `0.0`.
    pub fn get(&self, key: StatKey) -> f64 {
        self.0
            .get(&key)
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0)
    }

    pub fn insert(&mut self, key: StatKey, value: f64) {
        self.0.insert(key, value);
    }

    pub fn with(mut self, key: StatKey, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StatKey, f64)> for PlayerStats {
    fn from_iter<I: IntoIterator<Item = (StatKey, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A roster member's statistics at the time of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatSnapshot {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl PlayerStatSnapshot {
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            avatar: None,
            jersey_number: None,
            position: None,
            stats: PlayerStats::new(),
        }
    }

    pub fn with_stat(mut self, key: StatKey, value: f64) -> Self {
        self.stats.insert(key, value);
        self
    }
}

fn higher_is_better() -> bool {
    true
}

/// A leaderboard dimension such as "Top Scorers".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingCategory {
    pub key: String,
    pub stat_key: StatKey,
    #[serde(default = "higher_is_better")]
    pub is_higher_better: bool,
    pub label: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Whether players on zero make it onto a higher-is-better leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroPolicy {
    #[default]
    ExcludeZero,
    Keep,
}

/// Default leaderboard length.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOptions {
    pub top_n: usize,
    pub zero_policy: ZeroPolicy,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            zero_policy: ZeroPolicy::default(),
        }
    }
}

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub stat_value: f64,
}

impl PlayerRanking {
    pub(crate) fn new(rank: usize, player: &PlayerStatSnapshot, stat_value: f64) -> Self {
        Self {
            rank,
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            avatar: player.avatar.clone(),
            jersey_number: player.jersey_number,
            position: player.position.clone(),
            stat_value,
        }
    }
}

/// Rankings for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub category: RankingCategory,
    pub rankings: Vec<PlayerRanking>,
}
