use crate::config::settings::AppConfig;
use crate::services::SqliteStore;

pub mod results;
pub mod teams;

pub struct AppState {
    pub store: SqliteStore,
    pub config: AppConfig,
}
