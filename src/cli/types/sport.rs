//! Sport types and utilities.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sports supported by the club platform.
///
/// The sport decides which point table a league uses, which score breakdown
/// fields are tracked per match, and which leaderboards a roster gets.
///
/// # Examples
///
/// ```rust
/// use pitch_stats::Sport;
///
/// let sport: Sport = "soccer".parse().unwrap();
/// assert_eq!(sport, Sport::Football);
/// assert_eq!(Sport::AmericanFootball.to_string(), "american-football");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    Football,
    Futsal,
    Rugby,
    Cricket,
    Basketball,
    Netball,
    Hockey,
    AmericanFootball,
}

impl Sport {
    /// Every sport, in display order.
    pub const ALL: [Sport; 8] = [
        Sport::Football,
        Sport::Futsal,
        Sport::Rugby,
        Sport::Cricket,
        Sport::Basketball,
        Sport::Netball,
        Sport::Hockey,
        Sport::AmericanFootball,
    ];
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sport::Football => "football",
            Sport::Futsal => "futsal",
            Sport::Rugby => "rugby",
            Sport::Cricket => "cricket",
            Sport::Basketball => "basketball",
            Sport::Netball => "netball",
            Sport::Hockey => "hockey",
            Sport::AmericanFootball => "american-football",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sport {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "football" | "soccer" => Ok(Sport::Football),
            "futsal" => Ok(Sport::Futsal),
            "rugby" | "rugby-union" | "rugby-league" => Ok(Sport::Rugby),
            "cricket" => Ok(Sport::Cricket),
            "basketball" => Ok(Sport::Basketball),
            "netball" => Ok(Sport::Netball),
            "hockey" | "field-hockey" | "ice-hockey" => Ok(Sport::Hockey),
            "american-football" | "gridiron" | "nfl" => Ok(Sport::AmericanFootball),
            _ => Err(StatsError::UnknownSport {
                sport: s.to_string(),
            }),
        }
    }
}
