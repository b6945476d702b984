//! Import command implementation

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::{
    storage::{MatchDatabase, RosterPlayer, StoredMatch},
    Result,
};

use super::common::{open_database, read_json_array};

/// Rows written by one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub matches: usize,
    pub players: usize,
}

/// Load match and roster files into `db`
pub fn import_files(
    db: &mut MatchDatabase,
    matches: Option<&Path>,
    players: Option<&Path>,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    if let Some(path) = matches {
        let rows: Vec<StoredMatch> = read_json_array(path)?;
        for row in &rows {
            db.upsert_match(row)?;
        }
        summary.matches = rows.len();
        info!(path = %path.display(), count = rows.len(), "imported matches");
    }

    if let Some(path) = players {
        let rows: Vec<RosterPlayer> = read_json_array(path)?;
        for row in &rows {
            db.upsert_player(row)?;
        }
        summary.players = rows.len();
        info!(path = %path.display(), count = rows.len(), "imported roster players");
    }

    Ok(summary)
}

/// Handle the import command
pub fn handle_import(
    db_path: Option<PathBuf>,
    matches: Option<PathBuf>,
    players: Option<PathBuf>,
    clear: bool,
) -> Result<()> {
    let mut db = open_database(db_path)?;

    if clear {
        db.clear_all_data()?;
        println!("Cleared existing data");
    }

    let summary = import_files(&mut db, matches.as_deref(), players.as_deref())?;
    let (total_matches, total_players) = db.counts()?;

    println!(
        "✓ Imported {} matches and {} players ({} matches, {} players stored)",
        summary.matches, summary.players, total_matches, total_players
    );
    Ok(())
}
