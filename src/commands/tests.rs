//! Tests for command handlers and their text output

use super::*;
use crate::{
    cli::types::{MatchId, PlayerId, Sport, TeamId},
    config::SportTable,
    medical::{assess, WorkloadProfile},
    rankings::{PlayerStatSnapshot, RankingOptions, StatKey, ZeroPolicy},
    stats::MatchResult,
    storage::{MatchDatabase, MatchStatus, RosterPlayer, StoredMatch},
};
use chrono::{TimeZone, Utc};

fn finished(id: &str, home: &str, away: &str, score: (u32, u32), day: u32) -> StoredMatch {
    StoredMatch {
        sport: Sport::Football,
        status: MatchStatus::Finished,
        result: MatchResult {
            id: MatchId::new(id),
            home_team_id: TeamId::new(home),
            away_team_id: TeamId::new(away),
            home_score: Some(score.0),
            away_score: Some(score.1),
            kick_off_time: Utc.with_ymd_and_hms(2025, 3, day, 15, 0, 0).unwrap(),
            home_score_breakdown: None,
            away_score_breakdown: None,
        },
    }
}

fn player(id: &str, name: &str, goals: f64, yellow_cards: f64) -> RosterPlayer {
    RosterPlayer {
        team_id: TeamId::new("lions"),
        active: true,
        snapshot: PlayerStatSnapshot::new(PlayerId::new(id), name)
            .with_stat(StatKey::Goals, goals)
            .with_stat(StatKey::YellowCards, yellow_cards),
    }
}

fn seeded_context() -> CommandContext {
    let mut db = MatchDatabase::new_in_memory().unwrap();
    db.upsert_match(&finished("m1", "lions", "tigers", (2, 0), 1)).unwrap();
    db.upsert_match(&finished("m2", "bears", "lions", (1, 1), 8)).unwrap();
    db.upsert_match(&finished("m3", "lions", "bears", (0, 3), 15)).unwrap();
    db.upsert_match(&finished("m4", "tigers", "bears", (2, 2), 22)).unwrap();
    db.upsert_player(&player("p1", "Ada", 4.0, 2.0)).unwrap();
    db.upsert_player(&player("p2", "Ben", 0.0, 0.0)).unwrap();
    db.upsert_player(&player("p3", "Cal", 7.0, 1.0)).unwrap();
    CommandContext::with_parts(db, SportTable::builtin())
}

#[cfg(test)]
mod team_stats_tests {
    use super::*;
    use crate::commands::team_stats::{format_team_report, team_report};
    use crate::stats::Outcome;

    #[test]
    fn test_team_report_aggregates_stored_matches() {
        let ctx = seeded_context();
        let report = team_report(&ctx, &TeamId::new("lions"), Sport::Football, 50).unwrap();

        assert_eq!(report.stats.played, 3);
        assert_eq!(report.stats.wins, 1);
        assert_eq!(report.stats.draws, 1);
        assert_eq!(report.stats.losses, 1);
        assert_eq!(report.stats.goals_for, 3);
        assert_eq!(report.stats.goals_against, 4);
        assert_eq!(report.stats.points, 4);
        assert_eq!(report.stats.form, vec![Outcome::Loss, Outcome::Draw, Outcome::Win]);
        assert_eq!(report.recent_results.len(), 3);
        assert_eq!(report.recent_results[0].match_id.as_str(), "m3");
    }

    #[test]
    fn test_team_report_respects_limit() {
        let ctx = seeded_context();
        let report = team_report(&ctx, &TeamId::new("lions"), Sport::Football, 1).unwrap();
        assert_eq!(report.stats.played, 1);
        assert_eq!(report.stats.losses, 1);
    }

    #[test]
    fn test_team_report_unknown_team_is_empty() {
        let ctx = seeded_context();
        let report = team_report(&ctx, &TeamId::new("wolves"), Sport::Football, 50).unwrap();
        assert_eq!(report.stats, Default::default());
        assert!(report.recent_results.is_empty());
    }

    #[test]
    fn test_format_team_report() {
        let ctx = seeded_context();
        let report = team_report(&ctx, &TeamId::new("lions"), Sport::Football, 50).unwrap();
        let lines = format_team_report(&report);

        assert_eq!(lines[0], "lions (football)");
        assert!(lines[1].contains("Played 3"));
        assert!(lines[2].contains("GD -1"));
        assert_eq!(lines[3], "Form LDW");
        assert!(lines.iter().any(|l| l.contains("L H 0-3 vs bears")));
    }
}

#[cfg(test)]
mod rankings_tests {
    use super::*;
    use crate::commands::rankings::{format_leaderboard, ranking_options, team_leaderboards};
    use std::num::NonZeroUsize;

    #[test]
    fn test_ranking_options_flags_override_config() {
        let base = RankingOptions::default();
        assert_eq!(ranking_options(base, None, false), base);

        let adjusted = ranking_options(base, NonZeroUsize::new(3), true);
        assert_eq!(adjusted.top_n, 3);
        assert_eq!(adjusted.zero_policy, ZeroPolicy::Keep);
    }

    #[test]
    fn test_team_leaderboards_follow_category_order() {
        let ctx = seeded_context();
        let boards = team_leaderboards(
            &ctx,
            &TeamId::new("lions"),
            Sport::Football,
            &RankingOptions::default(),
        )
        .unwrap();

        let categories = ctx.sports.categories(Sport::Football);
        assert_eq!(boards.len(), categories.len());
        for (board, category) in boards.iter().zip(categories) {
            assert_eq!(&board.category, category);
        }

        let scorers = boards
            .iter()
            .find(|b| b.category.stat_key == StatKey::Goals)
            .unwrap();
        let names: Vec<&str> = scorers.rankings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cal", "Ada"]);
    }

    #[test]
    fn test_format_leaderboard() {
        let ctx = seeded_context();
        let boards = team_leaderboards(
            &ctx,
            &TeamId::new("lions"),
            Sport::Football,
            &RankingOptions::default(),
        )
        .unwrap();
        let scorers = boards
            .iter()
            .find(|b| b.category.stat_key == StatKey::Goals)
            .unwrap();

        let lines = format_leaderboard(scorers);
        assert!(lines[1].contains("1. Cal"));
        assert!(lines[1].contains(" 7"));
        assert!(lines[2].contains("2. Ada"));
    }
}

#[cfg(test)]
mod standings_tests {
    use super::*;
    use crate::commands::standings::{format_standings, league_table};

    #[test]
    fn test_league_table_orders_teams() {
        let ctx = seeded_context();
        let rows = league_table(&ctx, Sport::Football).unwrap();

        let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
        // bears: W1 D2 (5 pts), lions: W1 D1 L1 (4 pts), tigers: D1 L1 (1 pt)
        assert_eq!(order, vec!["bears", "lions", "tigers"]);
        assert_eq!(rows[0].stats.points, 5);
        assert_eq!(rows[0].position, 1);
    }

    #[test]
    fn test_league_table_other_sport_is_empty() {
        let ctx = seeded_context();
        assert!(league_table(&ctx, Sport::Rugby).unwrap().is_empty());
    }

    #[test]
    fn test_format_standings_has_header() {
        let ctx = seeded_context();
        let rows = league_table(&ctx, Sport::Football).unwrap();
        let lines = format_standings(&rows);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Pts"));
        assert!(lines[1].contains("bears"));
    }
}

#[cfg(test)]
mod misc_tests {
    use super::*;
    use crate::commands::common::format_stat_value;
    use crate::commands::import::import_files;
    use crate::commands::injury_risk::format_assessment;
    use crate::commands::sports::format_sport_table;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_stat_value() {
        assert_eq!(format_stat_value(7.0), "7");
        assert_eq!(format_stat_value(0.0), "0");
        assert_eq!(format_stat_value(1.5), "1.50");
    }

    #[test]
    fn test_import_files() {
        let mut matches = NamedTempFile::new().unwrap();
        write!(
            matches,
            r#"[{{"id":"m1","sport":"rugby","status":"FINISHED","homeTeamId":"a","awayTeamId":"b",
                "homeScore":24,"awayScore":10,"kickOffTime":"2025-02-01T15:00:00Z",
                "homeScoreBreakdown":{{"tries":3}}}},
               {{"id":"m2","sport":"rugby","homeTeamId":"b","awayTeamId":"a",
                "kickOffTime":"2025-03-01T15:00:00Z"}}]"#
        )
        .unwrap();

        let mut players = NamedTempFile::new().unwrap();
        write!(
            players,
            r#"[{{"teamId":"a","playerId":"p1","name":"Ada","stats":{{"tries":3,"tackles":40}}}}]"#
        )
        .unwrap();

        let mut db = MatchDatabase::new_in_memory().unwrap();
        let summary = import_files(&mut db, Some(matches.path()), Some(players.path())).unwrap();
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.players, 1);

        let scheduled = db.get_match(&MatchId::new("m2")).unwrap().unwrap();
        assert_eq!(scheduled.status, MatchStatus::Scheduled);

        let finished = db.finished_matches_for_sport(Sport::Rugby).unwrap();
        assert_eq!(finished.len(), 1);

        let roster = db.roster_snapshots(&TeamId::new("a")).unwrap();
        assert_eq!(roster[0].stats.get(StatKey::Tackles), 40.0);
    }

    #[test]
    fn test_import_rejects_malformed_file() {
        let mut matches = NamedTempFile::new().unwrap();
        write!(matches, "not json").unwrap();

        let mut db = MatchDatabase::new_in_memory().unwrap();
        let result = import_files(&mut db, Some(matches.path()), None);
        assert!(matches!(result, Err(crate::StatsError::Json(_))));
    }

    #[test]
    fn test_format_sport_table_lists_every_sport() {
        let lines = format_sport_table(&SportTable::builtin());
        assert!(lines.iter().any(|l| l == "rugby: win 4 / draw 2 / loss 0"));
        assert!(lines.iter().any(|l| l == "football: win 3 / draw 1 / loss 0"));
        assert!(lines.iter().any(|l| l.contains("fewest yellowCards")));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("leaderboards: top 10, zero values excluded")
        );
    }

    #[test]
    fn test_format_assessment() {
        let profile = WorkloadProfile {
            training_load: Some(0.9),
            sleep_hours: Some(8.0),
            previous_injuries: None,
        };
        let assessment = assess(&profile, 0.8).unwrap();
        let lines = format_assessment(&assessment);

        assert_eq!(lines[0], "Injury risk 80% (CRITICAL)");
        assert!(lines.contains(&"  - Reduce training intensity".to_string()));
        assert!(lines.contains(&"  - Medical evaluation recommended".to_string()));
    }
}
