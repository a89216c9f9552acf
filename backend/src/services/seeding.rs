use anyhow::Result;
use log::info;

use super::store::SqliteStore;
use crate::dataset::DataSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub players: usize,
    pub deliveries: usize,
}

/// Replaces the stored reference data with the contents of the data directory
pub struct SeedingService {
    dataset: DataSet,
}

impl SeedingService {
    pub fn new(dataset: DataSet) -> Self {
        Self { dataset }
    }

    pub fn run(&self, store: &SqliteStore) -> Result<SeedReport> {
        info!("=== Loading Reference Data ===");

        let players = self.dataset.load_players()?;
        let deliveries = self.dataset.load_deliveries()?;
        store.replace_reference_data(&players, &deliveries)?;

        info!(
            "  → Stored {} players and {} deliveries",
            players.len(),
            deliveries.len()
        );
        Ok(SeedReport {
            players: players.len(),
            deliveries: deliveries.len(),
        })
    }
}
