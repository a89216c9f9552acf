use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::connection::DbConn;
use crate::domain::BallEvent;

/// Replaces the stored match log, keeping the given delivery order.
/// Run inside the caller's transaction.
pub fn replace_all(conn: &Connection, deliveries: &[BallEvent]) -> Result<usize> {
    conn.execute("DELETE FROM deliveries", [])
        .context("Failed to clear deliveries")?;

    let mut stmt = conn.prepare(
        "INSERT INTO deliveries (batter, bowler, non_striker, batsman_run, extras_run, is_wicket_delivery, player_out, kind, fielders_involved) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;
    for (idx, ball) in deliveries.iter().enumerate() {
        stmt.execute(params![
            ball.batter,
            ball.bowler,
            ball.non_striker,
            ball.batsman_run,
            ball.extras_run,
            ball.is_wicket_delivery,
            ball.player_out,
            ball.kind,
            ball.fielders_involved
        ])
        .with_context(|| format!("Failed to insert delivery {}", idx + 1))?;
    }

    Ok(deliveries.len())
}

fn parse_delivery_row(row: &rusqlite::Row) -> rusqlite::Result<BallEvent> {
    Ok(BallEvent {
        batter: row.get(0)?,
        bowler: row.get(1)?,
        non_striker: row.get(2)?,
        batsman_run: row.get(3)?,
        extras_run: row.get(4)?,
        is_wicket_delivery: row.get(5)?,
        player_out: row.get(6)?,
        kind: row.get(7)?,
        fielders_involved: row.get(8)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<BallEvent>> {
    let sql = "SELECT batter, bowler, non_striker, batsman_run, extras_run, is_wicket_delivery, player_out, kind, fielders_involved FROM deliveries ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_delivery_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to load deliveries")?;

    Ok(rows)
}
