use std::path::PathBuf;

use crate::{CONFIG_PATH_ENV_VAR, DATABASE_PATH_ENV_VAR};

const APP_DIR: &str = "pitch-stats";

/// Path of the sport configuration override file.
///
/// `PITCH_STATS_CONFIG` wins; otherwise `~/.config/pitch-stats/sports.json`
/// (platform config dir, current directory if there is none).
pub fn config_path() -> PathBuf {
    if let Some(path) = env_path(CONFIG_PATH_ENV_VAR) {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("sports.json")
}

/// Path of the match database.
///
/// `PITCH_STATS_DB` wins; otherwise `~/.cache/pitch-stats/matches.db`.
pub fn database_path() -> PathBuf {
    if let Some(path) = env_path(DATABASE_PATH_ENV_VAR) {
        return path;
    }
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(APP_DIR).join("matches.db")
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
