use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::columns::decode_text;
use crate::domain::{Match, MatchId, MatchStatus, NewMatch, SessionId, SetScores, Team};

const MATCH_COLUMNS: &str = "id, session_id, event_type, round_number, court_number, team1_player1_id, team1_player2_id, team2_player1_id, team2_player2_id, team1_set1, team1_set2, team1_set3, team2_set1, team2_set2, team2_set3, status, created_at";

pub fn insert_match(conn: &Connection, drawn: &NewMatch) -> Result<Match> {
    let sql = format!(
        "INSERT INTO matches (session_id, event_type, round_number, court_number, team1_player1_id, team1_player2_id, team2_player1_id, team2_player2_id, team1_set1, team1_set2, team1_set3, team2_set1, team2_set2, team2_set3, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15) RETURNING {MATCH_COLUMNS}"
    );
    let [t1s1, t1s2, t1s3] = drawn.scores.team1;
    let [t2s1, t2s2, t2s3] = drawn.scores.team2;

    conn.query_row(
        &sql,
        params![
            drawn.session_id,
            drawn.event_type.label(),
            drawn.round_number,
            drawn.court_number,
            drawn.team1.player1,
            drawn.team1.player2,
            drawn.team2.player1,
            drawn.team2.player2,
            t1s1,
            t1s2,
            t1s3,
            t2s1,
            t2s2,
            t2s3,
            drawn.status.as_str()
        ],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        session_id: row.get(1)?,
        event_type: row.get(2)?,
        round_number: row.get(3)?,
        court_number: row.get(4)?,
        team1: Team {
            player1: row.get(5)?,
            player2: row.get(6)?,
        },
        team2: Team {
            player1: row.get(7)?,
            player2: row.get(8)?,
        },
        scores: SetScores {
            team1: [row.get(9)?, row.get(10)?, row.get(11)?],
            team2: [row.get(12)?, row.get(13)?, row.get(14)?],
        },
        status: decode_text(15, "status", row.get(15)?, MatchStatus::parse)?,
        created_at: row.get(16)?,
    })
}

pub fn find_by_id(conn: &Connection, id: MatchId) -> Result<Option<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

pub fn list_by_session(conn: &Connection, session_id: SessionId) -> Result<Vec<Match>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE session_id = ?1 ORDER BY round_number, court_number, id"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![session_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_by_session(conn: &Connection, session_id: SessionId) -> Result<usize> {
    conn.execute("DELETE FROM matches WHERE session_id = ?1", params![session_id])
        .context("Failed to delete session matches")
}

pub fn update_scores(
    conn: &Connection,
    id: MatchId,
    scores: &SetScores,
    status: MatchStatus,
) -> Result<Option<Match>> {
    let sql = format!(
        "UPDATE matches SET team1_set1 = ?1, team1_set2 = ?2, team1_set3 = ?3, team2_set1 = ?4, team2_set2 = ?5, team2_set3 = ?6, status = ?7 WHERE id = ?8 RETURNING {MATCH_COLUMNS}"
    );
    let [t1s1, t1s2, t1s3] = scores.team1;
    let [t2s1, t2s2, t2s3] = scores.team2;

    conn.query_row(
        &sql,
        params![t1s1, t1s2, t1s3, t2s1, t2s2, t2s3, status.as_str(), id],
        parse_match_row,
    )
    .optional()
    .context("Failed to update match scores")
}
