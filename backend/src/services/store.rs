use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::settings::StorageSettings;
use crate::database::{self, DbPool, StoredTeam};
use crate::domain::{BallEvent, Player, TeamEntry};

/// Source of the player table and the match log
pub trait ReferenceData {
    fn players(&self) -> Result<Vec<Player>>;
    fn deliveries(&self) -> Result<Vec<BallEvent>>;
}

/// Persistence of submitted fantasy teams
pub trait TeamStore {
    fn insert_team(&self, team: &TeamEntry) -> Result<StoredTeam>;
    fn list_teams(&self) -> Result<Vec<StoredTeam>>;
    /// Stores `(team id, total points)` pairs all together or not at all
    fn set_total_points_all(&self, scores: &[(i64, f64)]) -> Result<()>;
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Result<Self> {
        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        drop(conn);
        Ok(Self { pool })
    }

    pub fn open(settings: &StorageSettings) -> Result<Self> {
        Self::new(database::create_pool(&settings.database_path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(database::create_memory_pool()?)
    }

    /// Swaps players and match log together, so a failed import keeps the previous pair
    pub fn replace_reference_data(&self, players: &[Player], deliveries: &[BallEvent]) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start reference import")?;
        database::players::replace_all(&tx, players)?;
        database::deliveries::replace_all(&tx, deliveries)?;
        tx.commit().context("Failed to commit reference import")
    }
}

impl ReferenceData for SqliteStore {
    fn players(&self) -> Result<Vec<Player>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::list_all(&mut conn)
    }

    fn deliveries(&self) -> Result<Vec<BallEvent>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::deliveries::list_all(&mut conn)
    }
}

impl TeamStore for SqliteStore {
    fn insert_team(&self, team: &TeamEntry) -> Result<StoredTeam> {
        let mut conn = database::get_connection(&self.pool)?;
        database::teams::insert_team(&mut conn, team)
    }

    fn list_teams(&self) -> Result<Vec<StoredTeam>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::teams::list_all(&mut conn)
    }

    fn set_total_points_all(&self, scores: &[(i64, f64)]) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::teams::update_total_points_all(&mut conn, scores, Utc::now().naive_utc())?;
        Ok(())
    }
}
