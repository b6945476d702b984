//! Injury-risk triage for the medical staff dashboard
//!
//! The risk probability itself comes from an external model; this module
//! turns it into a category and a list of recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StatsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskCategory {
    /// Bucket a probability in `[0, 1]`.
    pub fn from_score(risk: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&risk) {
            return Err(StatsError::InvalidRisk { value: risk });
        }
        Ok(match risk {
            r if r < 0.25 => RiskCategory::Low,
            r if r < 0.50 => RiskCategory::Medium,
            r if r < 0.75 => RiskCategory::High,
            _ => RiskCategory::Critical,
        })
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Medium => "MEDIUM",
            RiskCategory::High => "HIGH",
            RiskCategory::Critical => "CRITICAL",
        };
        write!(f, "{}", s)
    }
}

/// Workload indicators recorded by the medical staff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadProfile {
    /// Normalised training load, 0.0 to 1.0.
    pub training_load: Option<f64>,
    /// Average nightly sleep in hours.
    pub sleep_hours: Option<f64>,
    pub previous_injuries: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub injury_risk: f64,
    pub risk_category: RiskCategory,
    pub recommendations: Vec<String>,
}

/// Categorise `risk` and collect recommendations for `profile`.
pub fn assess(profile: &WorkloadProfile, risk: f64) -> Result<RiskAssessment> {
    let risk_category = RiskCategory::from_score(risk)?;
    Ok(RiskAssessment {
        injury_risk: risk,
        risk_category,
        recommendations: recommendations(profile, risk),
    })
}

pub fn recommendations(profile: &WorkloadProfile, risk: f64) -> Vec<String> {
    let mut out = Vec::new();

    if profile.training_load.is_some_and(|load| load > 0.8) {
        out.push("Reduce training intensity");
    }
    if profile.sleep_hours.is_some_and(|hours| hours < 7.0) {
        out.push("Improve sleep schedule");
    }
    if profile.previous_injuries.is_some_and(|n| n > 2) {
        out.push("Consider injury prevention program");
    }
    if risk > 0.5 {
        out.push("Reduce playing time");
        out.push("Focus on recovery");
    }
    if risk > 0.7 {
        out.push("Medical evaluation recommended");
    }

    out.into_iter().map(String::from).collect()
}
