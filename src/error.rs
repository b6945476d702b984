//! Error types for the club statistics engine

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    #[error("Unknown sport: {sport}")]
    UnknownSport { sport: String },

    #[error("Unknown statistic: {stat}")]
    UnknownStat { stat: String },

    #[error("Invalid identifier: {value:?}")]
    InvalidId { value: String },

    #[error("Injury risk must be a probability between 0 and 1, got {value}")]
    InvalidRisk { value: f64 },
}

impl From<rusqlite::Error> for StatsError {
    fn from(err: rusqlite::Error) -> Self {
        StatsError::Database(err.into())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for StatsError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        StatsError::Logging {
            message: err.to_string(),
        }
    }
}
