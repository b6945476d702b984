//! Database schema and connection management

use crate::config::database_path;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Database connection manager for matches and rosters
pub struct MatchDatabase {
    pub(crate) conn: Connection,
}

impl MatchDatabase {
    /// Open the database at the default path and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&database_path())
    }

    /// Open (or create) the database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    /// Create an in-memory database, used by tests and one-off imports
    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_id TEXT PRIMARY KEY,
                sport TEXT NOT NULL,
                status TEXT NOT NULL,
                home_team_id TEXT NOT NULL,
                away_team_id TEXT NOT NULL,
                home_score INTEGER,
                away_score INTEGER,
                kick_off_time INTEGER NOT NULL, -- unix milliseconds
                home_score_breakdown TEXT,
                away_score_breakdown TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id TEXT PRIMARY KEY,
                team_id TEXT NOT NULL,
                name TEXT NOT NULL,
                avatar TEXT,
                jersey_number INTEGER,
                position TEXT,
                active INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_stats (
                player_id TEXT NOT NULL,
                stat_key TEXT NOT NULL,
                value REAL NOT NULL,
                PRIMARY KEY (player_id, stat_key),
                FOREIGN KEY (player_id) REFERENCES players(player_id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_home
             ON matches(home_team_id, status, kick_off_time)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_away
             ON matches(away_team_id, status, kick_off_time)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id, active)",
            [],
        )?;

        Ok(())
    }
}
