use serde::{Deserialize, Serialize};

use crate::cli::types::Sport;

/// Points awarded per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    pub win: i64,
    pub draw: i64,
    #[serde(default)]
    pub loss: i64,
}

impl PointTable {
    /// Three for a win, one for a draw.
    pub const STANDARD: PointTable = PointTable {
        win: 3,
        draw: 1,
        loss: 0,
    };

    /// Bonus-point leagues: four for a win, two for a draw.
    pub const BONUS: PointTable = PointTable {
        win: 4,
        draw: 2,
        loss: 0,
    };

    pub fn points(&self, wins: u32, draws: u32, losses: u32) -> i64 {
        self.win * i64::from(wins) + self.draw * i64::from(draws) + self.loss * i64::from(losses)
    }

    /// Built-in table for `sport`, [`PointTable::STANDARD`] when none is listed.
    pub fn builtin(sport: Sport) -> Self {
        BUILTIN_POINT_TABLES
            .iter()
            .find_map(|(s, table)| (*s == sport).then_some(*table))
            .unwrap_or_default()
    }
}

impl Default for PointTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Sports whose leagues do not use [`PointTable::STANDARD`].
static BUILTIN_POINT_TABLES: &[(Sport, PointTable)] = &[(Sport::Rugby, PointTable::BONUS)];

/// Score breakdown fields summed into `sport_stats`.
static BUILTIN_BREAKDOWN_FIELDS: &[(Sport, &[&str])] = &[(
    Sport::Rugby,
    &["tries", "conversions", "penalties", "dropGoals"],
)];

/// Everything the aggregator needs to know about a sport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringRules {
    pub points: PointTable,
    /// Breakdown sub-fields to total. Empty disables breakdown tracking.
    pub breakdown_fields: Vec<String>,
}

impl ScoringRules {
    pub fn builtin(sport: Sport) -> Self {
        Self {
            points: PointTable::builtin(sport),
            breakdown_fields: builtin_breakdown_fields(sport),
        }
    }
}

pub fn builtin_breakdown_fields(sport: Sport) -> Vec<String> {
    BUILTIN_BREAKDOWN_FIELDS
        .iter()
        .find(|(s, _)| *s == sport)
        .map(|(_, fields)| fields.iter().map(|f| f.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_points() {
        assert_eq!(PointTable::STANDARD.points(1, 1, 0), 4);
        assert_eq!(PointTable::STANDARD.points(10, 0, 5), 30);
    }

    #[test]
    fn test_bonus_points() {
        assert_eq!(PointTable::BONUS.points(3, 1, 0), 14);
    }

    #[test]
    fn test_builtin_tables() {
        assert_eq!(PointTable::builtin(Sport::Rugby), PointTable::BONUS);
        assert_eq!(PointTable::builtin(Sport::Football), PointTable::STANDARD);
        // Sports without an entry fall back to the standard table
        assert_eq!(PointTable::builtin(Sport::Netball), PointTable::STANDARD);
    }

    #[test]
    fn test_loss_points_are_applied() {
        let table = PointTable {
            win: 2,
            draw: 1,
            loss: -1,
        };
        assert_eq!(table.points(2, 1, 3), 2);
    }

    #[test]
    fn test_rugby_rules_track_breakdown() {
        let rules = ScoringRules::builtin(Sport::Rugby);
        assert_eq!(rules.points, PointTable::BONUS);
        assert!(rules.breakdown_fields.contains(&"tries".to_string()));

        let football = ScoringRules::builtin(Sport::Football);
        assert!(football.breakdown_fields.is_empty());
    }
}
