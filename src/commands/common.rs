//! Common utilities and helper functions shared across commands.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{
    config::{database_path, SportTable},
    storage::MatchDatabase,
    Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: MatchDatabase,
    pub sports: SportTable,
}

impl CommandContext {
    /// Open the database and load the sport table from the default config path
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let db = open_database(db_path)?;
        let sports = SportTable::load()?;
        Ok(Self { db, sports })
    }

    /// Build a context from already-open parts
    pub fn with_parts(db: MatchDatabase, sports: SportTable) -> Self {
        Self { db, sports }
    }
}

/// Open the database at `db_path`, falling back to [`database_path`]
pub fn open_database(db_path: Option<PathBuf>) -> Result<MatchDatabase> {
    let path = db_path.unwrap_or_else(database_path);
    debug!(path = %path.display(), "opening match database");
    Ok(MatchDatabase::open(&path)?)
}

/// Read a JSON array from `path`
pub fn read_json_array<T>(path: &Path) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a stat value without a trailing `.0` for whole numbers
pub fn format_stat_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
