//! Basic database query operations

use super::{models::*, schema::MatchDatabase};
use crate::cli::types::{MatchId, PlayerId, Sport, TeamId};
use crate::error::StatsError;
use crate::rankings::{PlayerStatSnapshot, PlayerStats, StatKey};
use crate::stats::{MatchResult, ScoreBreakdown};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tracing::debug;

/// Most recent finished matches handed to the aggregator per request.
pub const DEFAULT_MATCH_LIMIT: usize = 50;

const MATCH_COLUMNS: &str = "match_id, home_team_id, away_team_id, home_score, away_score,
                             kick_off_time, home_score_breakdown, away_score_breakdown";

impl MatchDatabase {
    /// Insert or update a match
    pub fn upsert_match(&mut self, stored: &StoredMatch) -> Result<()> {
        let m = &stored.result;
        self.conn.execute(
            "INSERT OR REPLACE INTO matches
             (match_id, sport, status, home_team_id, away_team_id, home_score, away_score,
              kick_off_time, home_score_breakdown, away_score_breakdown)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                m.id.as_str(),
                stored.sport.to_string(),
                stored.status.to_string(),
                m.home_team_id.as_str(),
                m.away_team_id.as_str(),
                m.home_score,
                m.away_score,
                m.kick_off_time.timestamp_millis(),
                encode_breakdown(m.home_score_breakdown.as_ref())?,
                encode_breakdown(m.away_score_breakdown.as_ref())?,
            ],
        )?;
        Ok(())
    }

    /// Insert or update a roster player and replace their statistics.
    ///
    /// Existing players keep their original row so roster order is stable.
    pub fn upsert_player(&mut self, player: &RosterPlayer) -> Result<()> {
        let snapshot = &player.snapshot;
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO players (player_id, team_id, name, avatar, jersey_number, position, active)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(player_id) DO UPDATE SET
                team_id = excluded.team_id,
                name = excluded.name,
                avatar = excluded.avatar,
                jersey_number = excluded.jersey_number,
                position = excluded.position,
                active = excluded.active",
            params![
                snapshot.player_id.as_str(),
                player.team_id.as_str(),
                snapshot.name,
                snapshot.avatar,
                snapshot.jersey_number,
                snapshot.position,
                player.active,
            ],
        )?;

        tx.execute(
            "DELETE FROM player_stats WHERE player_id = ?",
            params![snapshot.player_id.as_str()],
        )?;

        for (key, value) in snapshot.stats.iter() {
            tx.execute(
                "INSERT INTO player_stats (player_id, stat_key, value) VALUES (?, ?, ?)",
                params![snapshot.player_id.as_str(), key.to_string(), value],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Finished matches involving `team_id` in `sport`, newest first, capped at `limit`
    pub fn finished_matches_for_team(
        &self,
        team_id: &TeamId,
        sport: Sport,
        limit: usize,
    ) -> Result<Vec<MatchResult>> {
        let query = format!(
            "SELECT {MATCH_COLUMNS}
             FROM matches
             WHERE (home_team_id = ?1 OR away_team_id = ?1)
               AND sport = ?2
               AND status = ?3
               AND home_score IS NOT NULL
               AND away_score IS NOT NULL
             ORDER BY kick_off_time DESC, rowid DESC
             LIMIT ?4"
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![
                team_id.as_str(),
                sport.to_string(),
                MatchStatus::Finished.to_string(),
                limit as i64
            ],
            row_to_match,
        )?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        debug!(team_id = %team_id, sport = %sport, count = matches.len(), "loaded finished matches");
        Ok(matches)
    }

    /// All finished matches for `sport`, newest first
    pub fn finished_matches_for_sport(&self, sport: Sport) -> Result<Vec<MatchResult>> {
        let query = format!(
            "SELECT {MATCH_COLUMNS}
             FROM matches
             WHERE sport = ?1
               AND status = ?2
               AND home_score IS NOT NULL
               AND away_score IS NOT NULL
             ORDER BY kick_off_time DESC, rowid DESC"
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![sport.to_string(), MatchStatus::Finished.to_string()],
            row_to_match,
        )?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Active roster of `team_id` with statistics, in roster order
    pub fn roster_snapshots(&self, team_id: &TeamId) -> Result<Vec<PlayerStatSnapshot>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, avatar, jersey_number, position
             FROM players
             WHERE team_id = ? AND active = 1
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![team_id.as_str()], |row| {
            Ok(PlayerStatSnapshot {
                player_id: PlayerId::new(row.get::<_, String>(0)?),
                name: row.get(1)?,
                avatar: row.get(2)?,
                jersey_number: row.get(3)?,
                position: row.get(4)?,
                stats: PlayerStats::new(),
            })
        })?;

        let mut snapshots = Vec::new();
        for row in rows {
            let mut snapshot = row?;
            snapshot.stats = self.player_stats(&snapshot.player_id)?;
            snapshots.push(snapshot);
        }
        Ok(snapshots)
    }

    /// Statistics recorded for one player
    pub fn player_stats(&self, player_id: &PlayerId) -> Result<PlayerStats> {
        let mut stmt = self
            .conn
            .prepare("SELECT stat_key, value FROM player_stats WHERE player_id = ?")?;

        let rows = stmt.query_map(params![player_id.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut stats = PlayerStats::new();
        for row in rows {
            let (key, value) = row?;
            let key: StatKey = key
                .parse()
                .map_err(|_| StatsError::UnknownStat { stat: key.clone() })
                .with_context(|| format!("reading statistics for player {player_id}"))?;
            stats.insert(key, value);
        }
        Ok(stats)
    }

    /// Get a single match by id, whatever its status
    pub fn get_match(&self, match_id: &MatchId) -> Result<Option<StoredMatch>> {
        let query = format!("SELECT {MATCH_COLUMNS}, sport, status FROM matches WHERE match_id = ?");
        let mut stmt = self.conn.prepare(&query)?;

        let result = stmt.query_row(params![match_id.as_str()], |row| {
            Ok((
                row_to_match(row)?,
                row.get::<_, String>(8)?,
                row.get::<_, String>(9)?,
            ))
        });

        match result {
            Ok((result, sport, status)) => Ok(Some(StoredMatch {
                sport: sport.parse().context("stored sport")?,
                status: status.parse().context("stored status")?,
                result,
            })),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Count of stored matches and players
    pub fn counts(&self) -> Result<(i64, i64)> {
        let matches: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        let players: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok((matches, players))
    }

    /// Clear all data from the database
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM player_stats", [])?;
        self.conn.execute("DELETE FROM players", [])?;
        self.conn.execute("DELETE FROM matches", [])?;
        Ok(())
    }
}

fn row_to_match(row: &Row) -> rusqlite::Result<MatchResult> {
    let kick_off: i64 = row.get(5)?;
    Ok(MatchResult {
        id: MatchId::new(row.get::<_, String>(0)?),
        home_team_id: TeamId::new(row.get::<_, String>(1)?),
        away_team_id: TeamId::new(row.get::<_, String>(2)?),
        home_score: row.get(3)?,
        away_score: row.get(4)?,
        kick_off_time: DateTime::<Utc>::from_timestamp_millis(kick_off).ok_or_else(|| {
            rusqlite::Error::IntegralValueOutOfRange(5, kick_off)
        })?,
        home_score_breakdown: decode_breakdown(row, 6)?,
        away_score_breakdown: decode_breakdown(row, 7)?,
    })
}

fn encode_breakdown(breakdown: Option<&ScoreBreakdown>) -> Result<Option<String>> {
    breakdown
        .map(|b| serde_json::to_string(b).context("encoding score breakdown"))
        .transpose()
}

fn decode_breakdown(row: &Row, idx: usize) -> rusqlite::Result<Option<ScoreBreakdown>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        serde_json::from_str(&s).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
    })
    .transpose()
}
