pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod scoring;
pub mod services;
pub mod validation;

#[cfg(test)]
mod fixtures;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::dataset::DataSet;
use crate::services::processing::ProcessingService;
use crate::services::results::{current_standings, Standings};
use crate::services::seeding::SeedingService;
use crate::services::server::ServerService;
use crate::services::SqliteStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, seed: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, seed, config);
        service.run().await
    })
}

pub fn handle_seed() -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.storage)?;
    let service = SeedingService::new(DataSet::new(&config.storage.data_dir));
    service.run(&store).map(|_| ())
}

pub fn handle_process() -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.storage)?;
    let service = ProcessingService::new(&store, &config.scoring);
    service.run().map(|_| ())
}

pub fn handle_results() -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.storage)?;

    match current_standings(&store)? {
        Standings::NoScoredTeams => info!("No team results available yet."),
        Standings::Winners { top_points, teams } => {
            info!("Top score: {} points", top_points);
            for team in teams {
                info!(
                    "  → {} (captain {}, vice-captain {})",
                    team.entry.name, team.entry.captain, team.entry.vice_captain
                );
            }
        }
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
