pub mod settings;

pub use settings::{AppConfig, RosterSettings, ScoringSettings, StorageSettings};
