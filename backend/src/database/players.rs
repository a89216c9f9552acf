use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::connection::DbConn;
use crate::domain::Player;

/// Swaps the whole player reference table. Run inside the caller's transaction.
pub fn replace_all(conn: &Connection, players: &[Player]) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to clear players")?;

    let mut stmt = conn.prepare("INSERT INTO players (name, role, team) VALUES (?1, ?2, ?3)")?;
    for player in players {
        stmt.execute(params![player.name, player.role.as_str(), player.team])
            .with_context(|| format!("Failed to insert player {}", player.name))?;
    }

    Ok(players.len())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    let role: String = row.get(1)?;
    Ok(Player {
        name: row.get(0)?,
        role: role.parse().map_err(|e: String| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, e.into())
        })?,
        team: row.get(2)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT name, role, team FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load players")?;

    Ok(rows)
}
