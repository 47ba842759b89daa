use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::columns::{decode_json, encode_json};
use crate::domain::{Registration, SessionId};

/// One registration per player per session; registering again replaces the event list.
pub fn upsert_registration(conn: &Connection, registration: &Registration) -> Result<()> {
    let sql = "INSERT INTO registrations (session_id, player_id, selected_events) VALUES (?1, ?2, ?3) ON CONFLICT(session_id, player_id) DO UPDATE SET selected_events = excluded.selected_events";

    conn.execute(
        sql,
        params![
            registration.session_id,
            registration.player_id,
            encode_json(&registration.selected_events)?
        ],
    )
    .context("Failed to upsert registration")
    .map(|_| ())
}

fn parse_registration_row(row: &rusqlite::Row) -> rusqlite::Result<Registration> {
    Ok(Registration {
        session_id: row.get(0)?,
        player_id: row.get(1)?,
        selected_events: decode_json(2, row.get(2)?)?,
    })
}

pub fn list_by_session(conn: &Connection, session_id: SessionId) -> Result<Vec<Registration>> {
    let sql = "SELECT session_id, player_id, selected_events FROM registrations WHERE session_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![session_id], parse_registration_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
