pub mod connection;
pub mod deliveries;
pub mod models;
pub mod players;
pub mod setup;
pub mod teams;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
