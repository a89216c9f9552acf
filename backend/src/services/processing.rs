use anyhow::Result;
use log::{debug, info, warn};

use super::store::{ReferenceData, TeamStore};
use crate::config::settings::ScoringSettings;
use crate::scoring::Ledger;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingReport {
    pub deliveries: usize,
    pub teams_scored: usize,
}

/// Scores every stored team against the match log and persists the totals
pub struct ProcessingService<'a, S> {
    store: &'a S,
    settings: &'a ScoringSettings,
}

impl<'a, S> ProcessingService<'a, S>
where
    S: ReferenceData + TeamStore,
{
    pub fn new(store: &'a S, settings: &'a ScoringSettings) -> Self {
        Self { store, settings }
    }

    pub fn run(&self) -> Result<ProcessingReport> {
        info!("=== Processing Match Result ===");

        let deliveries = self.store.deliveries()?;
        info!("  → Loaded {} deliveries", deliveries.len());

        let ledger = Ledger::from_deliveries(&deliveries, self.settings);
        if ledger.is_empty() {
            warn!("  → Match log credits no player, every team scores 0");
        } else {
            info!("  → {} players earned points", ledger.len());
        }

        let teams_scored = self.score_teams(&ledger)?;
        info!("  → Scored {} teams", teams_scored);

        info!("=== Processing Complete ===");
        Ok(ProcessingReport {
            deliveries: deliveries.len(),
            teams_scored,
        })
    }

    /// Totals are computed up front and written as one batch
    fn score_teams(&self, ledger: &Ledger) -> Result<usize> {
        let teams = self.store.list_teams()?;

        let scores: Vec<(i64, f64)> = teams
            .iter()
            .map(|team| {
                let score = ledger.score_team(&team.entry, self.settings);
                debug!("  {} ({}): {:?}", team.entry.name, team.id, score.contributions);
                (team.id, score.total)
            })
            .collect();

        self.store.set_total_points_all(&scores)?;
        Ok(scores.len())
    }
}
