use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use rusqlite::params;

use super::connection::DbConn;
use super::models::StoredTeam;
use crate::domain::TeamEntry;

const TEAM_COLUMNS: &str = "id, name, players, captain, vice_captain, total_points, scored_at, created_at";

pub fn insert_team(conn: &mut DbConn, team: &TeamEntry) -> Result<StoredTeam> {
    let players = serde_json::to_string(&team.players).context("Failed to encode team players")?;
    let created_at = Utc::now().naive_utc();
    let sql = format!(
        "INSERT INTO teams (name, players, captain, vice_captain, created_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
        TEAM_COLUMNS
    );

    conn.query_row(
        &sql,
        params![team.name, players, team.captain, team.vice_captain, created_at],
        parse_team_row,
    )
    .context("Failed to insert team")
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<StoredTeam> {
    let players: String = row.get(2)?;
    Ok(StoredTeam {
        id: row.get(0)?,
        entry: TeamEntry {
            name: row.get(1)?,
            players: serde_json::from_str(&players).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
            })?,
            captain: row.get(3)?,
            vice_captain: row.get(4)?,
        },
        total_points: row.get(5)?,
        scored_at: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<StoredTeam>> {
    let sql = format!("SELECT {} FROM teams ORDER BY id", TEAM_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load teams")?;

    Ok(rows)
}

/// Writes every score in one transaction. An unknown team id rolls the whole batch back.
pub fn update_total_points_all(
    conn: &mut DbConn,
    scores: &[(i64, f64)],
    scored_at: NaiveDateTime,
) -> Result<usize> {
    let tx = conn.transaction().context("Failed to start scoring update")?;

    {
        let mut stmt = tx.prepare("UPDATE teams SET total_points = ?1, scored_at = ?2 WHERE id = ?3")?;
        for (id, total_points) in scores {
            let updated = stmt
                .execute(params![total_points, scored_at, id])
                .with_context(|| format!("Failed to update points of team {}", id))?;
            if updated == 0 {
                anyhow::bail!("Team {} does not exist", id);
            }
        }
    }

    tx.commit().context("Failed to commit scoring update")?;
    Ok(scores.len())
}
