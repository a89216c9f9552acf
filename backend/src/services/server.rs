use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::seeding::SeedingService;
use super::store::SqliteStore;
use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::dataset::DataSet;

pub struct ServerService {
    port: u16,
    seed: bool,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, seed: bool, config: AppConfig) -> Self {
        Self { port, seed, config }
    }

    pub async fn run(&self) -> Result<()> {
        let store = SqliteStore::open(&self.config.storage)?;

        if self.seed {
            SeedingService::new(DataSet::new(&self.config.storage.data_dir)).run(&store)?;
        }

        let state = Arc::new(AppState {
            store,
            config: self.config.clone(),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
