use std::collections::HashSet;

use crate::error::{Result, StatsError};

use super::SportConfigFile;

/// Validates an override file before it is merged over the built-in table.
///
/// # Validation Rules
/// - `topN`, when given, must be at least 1
/// - a sport's category keys must be unique and non-empty
/// - breakdown field names must be non-empty
pub fn validate_config(file: &SportConfigFile) -> Result<()> {
    if file.top_n == Some(0) {
        return Err(config_error("topN must be at least 1"));
    }

    for (sport, overrides) in &file.sports {
        if let Some(categories) = &overrides.categories {
            let mut seen = HashSet::new();
            for category in categories {
                if category.key.trim().is_empty() {
                    return Err(config_error(format!("{sport}: category key cannot be empty")));
                }
                if !seen.insert(category.key.as_str()) {
                    return Err(config_error(format!(
                        "{sport}: duplicate category key '{}'",
                        category.key
                    )));
                }
            }
        }

        if let Some(fields) = &overrides.breakdown_fields {
            if fields.iter().any(|f| f.trim().is_empty()) {
                return Err(config_error(format!(
                    "{sport}: breakdown field names cannot be empty"
                )));
            }
        }
    }

    Ok(())
}

fn config_error(message: impl Into<String>) -> StatsError {
    StatsError::Config {
        message: message.into(),
    }
}
