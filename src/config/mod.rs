//! Sport configuration
//!
//! Point tables, breakdown fields and leaderboard categories are data, not
//! code: the built-in table covers every [`Sport`], and an optional JSON file
//! can replace any part of it.
//!
//! ```json
//! {
//!   "topN": 5,
//!   "zeroPolicy": "keep",
//!   "sports": {
//!     "rugby": { "points": { "win": 4, "draw": 2, "loss": 0 } },
//!     "netball": { "breakdownFields": ["centrePassGoals"] }
//!   }
//! }
//! ```

pub mod paths;
pub mod validation;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    cli::types::Sport,
    error::Result,
    rankings::{builtin_categories, RankingCategory, RankingOptions, ZeroPolicy},
    stats::{points::builtin_breakdown_fields, PointTable, ScoringRules},
};

pub use paths::{config_path, database_path};
pub use validation::validate_config;

/// Effective settings for one sport.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportSettings {
    pub points: PointTable,
    pub breakdown_fields: Vec<String>,
    pub categories: Vec<RankingCategory>,
}

impl SportSettings {
    pub fn builtin(sport: Sport) -> Self {
        Self {
            points: PointTable::builtin(sport),
            breakdown_fields: builtin_breakdown_fields(sport),
            categories: builtin_categories(sport),
        }
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            points: self.points,
            breakdown_fields: self.breakdown_fields.clone(),
        }
    }
}

/// Lookup table keyed by sport, plus the leaderboard options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportTable {
    pub sports: BTreeMap<Sport, SportSettings>,
    pub ranking: RankingOptions,
}

impl SportTable {
    pub fn builtin() -> Self {
        Self {
            sports: Sport::ALL
                .iter()
                .map(|sport| (*sport, SportSettings::builtin(*sport)))
                .collect(),
            ranking: RankingOptions::default(),
        }
    }

    /// Built-in table with the override file at [`config_path`] applied, if it exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Built-in table with the override file at `path` applied.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no sport config file, using built-in table");
            return Ok(Self::builtin());
        }

        let contents = std::fs::read_to_string(path)?;
        let file: SportConfigFile = serde_json::from_str(&contents)?;
        validate_config(&file)?;

        info!(path = %path.display(), sports = file.sports.len(), "loaded sport config overrides");
        Ok(Self::builtin().with_overrides(file))
    }

    pub fn with_overrides(mut self, file: SportConfigFile) -> Self {
        for (sport, overrides) in file.sports {
            let settings = self.sports.entry(sport).or_default();
            if let Some(points) = overrides.points {
                settings.points = points;
            }
            if let Some(fields) = overrides.breakdown_fields {
                settings.breakdown_fields = fields;
            }
            if let Some(categories) = overrides.categories {
                settings.categories = categories;
            }
        }
        if let Some(top_n) = file.top_n {
            self.ranking.top_n = top_n;
        }
        if let Some(zero_policy) = file.zero_policy {
            self.ranking.zero_policy = zero_policy;
        }
        self
    }

    pub fn settings(&self, sport: Sport) -> Option<&SportSettings> {
        self.sports.get(&sport)
    }

    /// Point table for `sport`, [`PointTable::STANDARD`] if unconfigured.
    pub fn points(&self, sport: Sport) -> PointTable {
        self.settings(sport).map(|s| s.points).unwrap_or_default()
    }

    pub fn scoring_rules(&self, sport: Sport) -> ScoringRules {
        self.settings(sport)
            .map(SportSettings::scoring_rules)
            .unwrap_or_default()
    }

    pub fn categories(&self, sport: Sport) -> &[RankingCategory] {
        self.settings(sport)
            .map(|s| s.categories.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for SportTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Partial settings for one sport; `None` keeps the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SportOverride {
    pub points: Option<PointTable>,
    pub breakdown_fields: Option<Vec<String>>,
    pub categories: Option<Vec<RankingCategory>>,
}

/// On-disk override file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SportConfigFile {
    #[serde(default)]
    pub sports: BTreeMap<Sport, SportOverride>,
    pub top_n: Option<usize>,
    pub zero_policy: Option<ZeroPolicy>,
}
