use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RosterSettings {
    pub roster_size: usize,
    pub max_source_teams: usize,
    pub min_per_role: usize,
    pub max_per_role: usize,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            roster_size: 11,
            max_source_teams: 2,
            min_per_role: 1,
            max_per_role: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub four_bonus: i64,
    pub six_bonus: i64,
    pub wicket_points: i64,
    pub bowled_lbw_bonus: i64,
    pub fielding_points: i64,
    pub captain_multiplier: f64,
    pub vice_captain_multiplier: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            four_bonus: 1,
            six_bonus: 2,
            wicket_points: 25,
            bowled_lbw_bonus: 8,
            fielding_points: 8,
            captain_multiplier: 2.0,
            vice_captain_multiplier: 1.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: "fantasy_cricket.db".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StorageSettings {
    /// Defaults overridden by `DATABASE_PATH` and `DATA_DIR`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub roster: RosterSettings,
    pub scoring: ScoringSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            roster: RosterSettings::default(),
            scoring: ScoringSettings::default(),
            storage: StorageSettings::from_env(),
        }
    }
}
