//! Injury-risk command implementation

use crate::{
    medical::{assess, RiskAssessment, WorkloadProfile},
    Result,
};

use super::common::print_json;

/// Render an assessment as text lines
pub fn format_assessment(assessment: &RiskAssessment) -> Vec<String> {
    let mut lines = vec![format!(
        "Injury risk {:.0}% ({})",
        assessment.injury_risk * 100.0,
        assessment.risk_category
    )];
    if assessment.recommendations.is_empty() {
        lines.push("  no changes recommended".to_string());
    }
    for recommendation in &assessment.recommendations {
        lines.push(format!("  - {}", recommendation));
    }
    lines
}

/// Handle the injury-risk command
pub fn handle_injury_risk(profile: &WorkloadProfile, risk: f64, as_json: bool) -> Result<()> {
    let assessment = assess(profile, risk)?;

    if as_json {
        return print_json(&assessment);
    }
    for line in format_assessment(&assessment) {
        println!("{}", line);
    }
    Ok(())
}
