use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{BallEvent, Player};

const PLAYERS_FILE: &str = "players.json";
const MATCH_FILE: &str = "match.json";

/// Directory holding the seed files for one match
pub struct DataSet {
    data_dir: PathBuf,
}

impl DataSet {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load_players(&self) -> Result<Vec<Player>> {
        self.load(PLAYERS_FILE)
    }

    pub fn load_deliveries(&self) -> Result<Vec<BallEvent>> {
        self.load(MATCH_FILE)
    }

    fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let file_path = self.data_dir.join(file_name);

        let json = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let records: Vec<T> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", file_path.display()))?;

        info!("Loaded {} records from {}", records.len(), file_path.display());
        Ok(records)
    }
}
