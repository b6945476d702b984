//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_rusqlite_error_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let sql_error = conn
            .execute("SELECT * FROM table_that_does_not_exist", [])
            .unwrap_err();
        let stats_error = StatsError::from(sql_error);

        match stats_error {
            StatsError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let stats_error = StatsError::from(anyhow::anyhow!("connection dropped"));
        assert_eq!(stats_error.to_string(), "Database error: connection dropped");
    }

    #[test]
    fn test_boxed_error_conversion() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "subscriber already set".into();
        let stats_error = StatsError::from(boxed);

        match stats_error {
            StatsError::Logging { message } => assert_eq!(message, "subscriber already set"),
            _ => panic!("Expected Logging error variant"),
        }
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_unknown_sport_display() {
        let error = StatsError::UnknownSport {
            sport: "quidditch".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown sport: quidditch");
    }

    #[test]
    fn test_unknown_stat_display() {
        let error = StatsError::UnknownStat {
            stat: "hatTricks".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown statistic: hatTricks");
    }

    #[test]
    fn test_invalid_id_display() {
        let error = StatsError::InvalidId {
            value: "  ".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid identifier: \"  \"");
    }

    #[test]
    fn test_invalid_risk_display() {
        let error = StatsError::InvalidRisk { value: 1.5 };
        assert_eq!(
            error.to_string(),
            "Injury risk must be a probability between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn test_config_display() {
        let error = StatsError::Config {
            message: "could not determine config directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: could not determine config directory"
        );
    }
}
