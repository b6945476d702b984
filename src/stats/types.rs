//! Match records and aggregate result types

use crate::cli::types::{MatchId, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Sport-specific sub-statistics for one side of a match, e.g. rugby
/// `{"tries": 3, "conversions": 2, "penalties": 1}`.
pub type ScoreBreakdown = BTreeMap<String, u32>;

/// A match record as supplied by the persistence layer.
///
/// Both scores must be present for the match to count as a completed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    #[serde(alias = "scheduledAt")]
    pub kick_off_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score_breakdown: Option<ScoreBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score_breakdown: Option<ScoreBreakdown>,
}

impl MatchResult {
    /// Which side `team_id` played on, or `None` if the team is not a participant.
    pub fn venue_of(&self, team_id: &TeamId) -> Option<Venue> {
        if &self.home_team_id == team_id {
            Some(Venue::Home)
        } else if &self.away_team_id == team_id {
            Some(Venue::Away)
        } else {
            None
        }
    }

    /// `(home, away)` when both scores are recorded.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    /// The match seen from `team_id`'s side. `None` when the team did not
    /// play in it or the match has no final score.
    pub fn view_for(&self, team_id: &TeamId) -> Option<TeamView<'_>> {
        let venue = self.venue_of(team_id)?;
        let (home, away) = self.final_score()?;

        let view = match venue {
            Venue::Home => TeamView {
                match_id: &self.id,
                opponent_id: &self.away_team_id,
                venue,
                team_score: home,
                opponent_score: away,
                kick_off_time: self.kick_off_time,
                breakdown: self.home_score_breakdown.as_ref(),
            },
            Venue::Away => TeamView {
                match_id: &self.id,
                opponent_id: &self.home_team_id,
                venue,
                team_score: away,
                opponent_score: home,
                kick_off_time: self.kick_off_time,
                breakdown: self.away_score_breakdown.as_ref(),
            },
        };
        Some(view)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Home => write!(f, "H"),
            Venue::Away => write!(f, "A"),
        }
    }
}

/// Result of a single match for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn from_scores(team_score: u32, opponent_score: u32) -> Self {
        match team_score.cmp(&opponent_score) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Borrowed, team-relative view of a completed match.
#[derive(Debug, Clone, Copy)]
pub struct TeamView<'a> {
    pub match_id: &'a MatchId,
    pub opponent_id: &'a TeamId,
    pub venue: Venue,
    pub team_score: u32,
    pub opponent_score: u32,
    pub kick_off_time: DateTime<Utc>,
    /// The team's own side of the score breakdown, if recorded.
    pub breakdown: Option<&'a ScoreBreakdown>,
}

impl TeamView<'_> {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.team_score, self.opponent_score)
    }

    pub fn to_summary(&self) -> MatchSummary {
        MatchSummary {
            match_id: self.match_id.clone(),
            opponent_id: self.opponent_id.clone(),
            venue: self.venue,
            team_score: self.team_score,
            opponent_score: self.opponent_score,
            outcome: self.outcome(),
            kick_off_time: self.kick_off_time,
        }
    }
}

/// Aggregated record for one team over a set of completed matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAggregateStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: i64,
    /// Whole-number percentage of matches won.
    pub win_rate: u32,
    /// Up to five outcomes, most recent first.
    pub form: Vec<Outcome>,
    pub clean_sheets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_stats: Option<BTreeMap<String, u32>>,
}

impl TeamAggregateStats {
    /// Form rendered as a compact string, e.g. `"WWDLW"`.
    pub fn form_string(&self) -> String {
        self.form.iter().map(Outcome::as_char).collect()
    }
}

/// One row of a team's recent match history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub opponent_id: TeamId,
    pub venue: Venue,
    pub team_score: u32,
    pub opponent_score: u32,
    pub outcome: Outcome,
    pub kick_off_time: DateTime<Utc>,
}
