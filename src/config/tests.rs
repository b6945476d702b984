//! Unit tests for sport configuration

use super::*;
use crate::error::StatsError;
use crate::rankings::StatKey;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_builtin_table_covers_every_sport() {
    let table = SportTable::builtin();
    for sport in Sport::ALL {
        assert!(table.settings(sport).is_some());
    }
    assert_eq!(table.points(Sport::Rugby), PointTable::BONUS);
    assert_eq!(table.points(Sport::Cricket), PointTable::STANDARD);
    assert_eq!(table.ranking, RankingOptions::default());
}

#[test]
fn test_unconfigured_sport_falls_back_to_standard() {
    let mut table = SportTable::builtin();
    table.sports.remove(&Sport::Netball);

    assert_eq!(table.points(Sport::Netball), PointTable::STANDARD);
    assert!(table.categories(Sport::Netball).is_empty());
    assert!(table.scoring_rules(Sport::Netball).breakdown_fields.is_empty());
}

#[test]
fn test_missing_file_uses_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let table = SportTable::load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(table, SportTable::builtin());
}

#[test]
fn test_overrides_replace_only_given_fields() {
    let file = write_config(
        r#"{
            "topN": 3,
            "zeroPolicy": "keep",
            "sports": {
                "football": { "points": { "win": 2, "draw": 1 } },
                "netball": {
                    "breakdownFields": ["centrePassGoals"],
                    "categories": [
                        { "key": "shooters", "statKey": "goals", "label": "Shooters" }
                    ]
                }
            }
        }"#,
    );

    let table = SportTable::load_from(file.path()).unwrap();

    assert_eq!(table.ranking.top_n, 3);
    assert_eq!(table.ranking.zero_policy, ZeroPolicy::Keep);

    let football = table.settings(Sport::Football).unwrap();
    assert_eq!(football.points, PointTable { win: 2, draw: 1, loss: 0 });
    assert_eq!(football.categories, builtin_categories(Sport::Football));

    let netball = table.settings(Sport::Netball).unwrap();
    assert_eq!(netball.breakdown_fields, vec!["centrePassGoals".to_string()]);
    assert_eq!(netball.categories.len(), 1);
    assert_eq!(netball.categories[0].stat_key, StatKey::Goals);
    assert!(netball.categories[0].is_higher_better);

    // Untouched sports keep their built-in settings
    assert_eq!(table.settings(Sport::Rugby), Some(&SportSettings::builtin(Sport::Rugby)));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("{ not json");
    assert!(matches!(
        SportTable::load_from(file.path()),
        Err(StatsError::Json(_))
    ));
}

#[test]
fn test_unknown_sport_in_file_is_an_error() {
    let file = write_config(r#"{ "sports": { "quidditch": {} } }"#);
    assert!(matches!(
        SportTable::load_from(file.path()),
        Err(StatsError::Json(_))
    ));
}

#[test]
fn test_zero_top_n_rejected() {
    let file = write_config(r#"{ "topN": 0 }"#);
    assert!(matches!(
        SportTable::load_from(file.path()),
        Err(StatsError::Config { .. })
    ));
}

#[test]
fn test_duplicate_category_keys_rejected() {
    let file = SportConfigFile {
        sports: [(
            Sport::Hockey,
            SportOverride {
                categories: Some(vec![
                    RankingCategory {
                        key: "topScorers".into(),
                        stat_key: StatKey::Goals,
                        is_higher_better: true,
                        label: "Top Scorers".into(),
                        unit: "goals".into(),
                        icon: None,
                    },
                    RankingCategory {
                        key: "topScorers".into(),
                        stat_key: StatKey::Assists,
                        is_higher_better: true,
                        label: "Top Scorers again".into(),
                        unit: "assists".into(),
                        icon: None,
                    },
                ]),
                ..SportOverride::default()
            },
        )]
        .into_iter()
        .collect(),
        ..SportConfigFile::default()
    };

    match validate_config(&file) {
        Err(StatsError::Config { message }) => assert!(message.contains("duplicate")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_blank_breakdown_field_rejected() {
    let file = write_config(r#"{ "sports": { "rugby": { "breakdownFields": ["tries", " "] } } }"#);
    assert!(matches!(
        SportTable::load_from(file.path()),
        Err(StatsError::Config { .. })
    ));
}

#[test]
fn test_scoring_rules_follow_settings() {
    let rules = SportTable::builtin().scoring_rules(Sport::Rugby);
    assert_eq!(rules.points, PointTable::BONUS);
    assert_eq!(rules.breakdown_fields, builtin_breakdown_fields(Sport::Rugby));
}
