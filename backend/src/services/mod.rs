pub mod processing;
pub mod registration;
pub mod results;
pub mod seeding;
pub mod server;
pub mod store;

pub use store::{ReferenceData, SqliteStore, TeamStore};
