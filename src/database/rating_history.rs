use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};

use super::columns::{decode_json, decode_text, encode_json};
use crate::domain::{ExpectedOutcome, MatchId, MatchOutcome, NewRatingHistory, PlayerId, RatingHistory};

const HISTORY_COLUMNS: &str = "id, player_id, event_type, old_rating, new_rating, rating_change, match_id, opponent_ids, result, expected_outcome, created_at";

pub fn insert_history(conn: &Connection, row: &NewRatingHistory) -> Result<RatingHistory> {
    let sql = format!(
        "INSERT INTO rating_history (player_id, event_type, old_rating, new_rating, rating_change, match_id, opponent_ids, result, expected_outcome, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) RETURNING {HISTORY_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            row.player_id,
            row.event_type,
            row.old_rating,
            row.new_rating,
            row.rating_change,
            row.match_id,
            encode_json(&row.opponent_ids)?,
            row.result.as_str(),
            row.expected_outcome.as_str(),
            Utc::now().naive_utc()
        ],
        parse_history_row,
    )
    .context("Failed to insert rating history")
}

fn parse_history_row(row: &rusqlite::Row) -> rusqlite::Result<RatingHistory> {
    Ok(RatingHistory {
        id: row.get(0)?,
        player_id: row.get(1)?,
        event_type: row.get(2)?,
        old_rating: row.get(3)?,
        new_rating: row.get(4)?,
        rating_change: row.get(5)?,
        match_id: row.get(6)?,
        opponent_ids: decode_json(7, row.get(7)?)?,
        result: decode_text(8, "result", row.get(8)?, MatchOutcome::parse)?,
        expected_outcome: decode_text(9, "expected_outcome", row.get(9)?, ExpectedOutcome::parse)?,
        created_at: row.get(10)?,
    })
}

pub fn list_by_match(conn: &Connection, match_id: MatchId) -> Result<Vec<RatingHistory>> {
    let sql = format!("SELECT {HISTORY_COLUMNS} FROM rating_history WHERE match_id = ?1 ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_history_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_by_match(conn: &Connection, match_id: MatchId) -> Result<usize> {
    conn.execute("DELETE FROM rating_history WHERE match_id = ?1", params![match_id])
        .context("Failed to delete rating history for match")
}

/// Newest first. `event_type` must match the stored label exactly when given.
pub fn list_by_player(
    conn: &Connection,
    player_id: PlayerId,
    event_type: Option<&str>,
) -> Result<Vec<RatingHistory>> {
    let sql = format!(
        "SELECT {HISTORY_COLUMNS} FROM rating_history WHERE player_id = ?1 AND (?2 IS NULL OR event_type = ?2) ORDER BY created_at DESC, id DESC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_id, event_type], parse_history_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
