use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Session, SessionId};

pub fn upsert_session(conn: &Connection, session: &Session) -> Result<Session> {
    let sql = "INSERT INTO sessions (id, name, date, number_of_rounds, courts_available) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(id) DO UPDATE SET name = excluded.name, date = excluded.date, number_of_rounds = excluded.number_of_rounds, courts_available = excluded.courts_available RETURNING id, name, date, number_of_rounds, courts_available";

    conn.query_row(
        sql,
        params![
            session.id,
            session.name,
            session.date,
            session.number_of_rounds,
            session.courts_available
        ],
        parse_session_row,
    )
    .context("Failed to upsert session")
}

fn parse_session_row(row: &rusqlite::Row) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        number_of_rounds: row.get(3)?,
        courts_available: row.get(4)?,
    })
}

pub fn find_by_id(conn: &Connection, id: SessionId) -> Result<Option<Session>> {
    let sql = "SELECT id, name, date, number_of_rounds, courts_available FROM sessions WHERE id = ?1";

    conn.query_row(sql, params![id], parse_session_row)
        .optional()
        .context("Failed to query session by id")
}
