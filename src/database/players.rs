use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::columns::decode_text;
use crate::domain::{EventCategory, Gender, Player, PlayerId, Rating};

const PLAYER_COLUMNS: &str = "id, name, gender, singles_rating, mens_doubles_rating, womens_doubles_rating, mixed_doubles_rating";

/// Inserts the player, or overwrites the existing record with the same id.
pub fn upsert_player(conn: &Connection, player: &Player) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players ({PLAYER_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
         ON CONFLICT(id) DO UPDATE SET name = excluded.name, gender = excluded.gender, \
         singles_rating = excluded.singles_rating, mens_doubles_rating = excluded.mens_doubles_rating, \
         womens_doubles_rating = excluded.womens_doubles_rating, mixed_doubles_rating = excluded.mixed_doubles_rating \
         RETURNING {PLAYER_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            player.id,
            player.name,
            player.gender.as_str(),
            player.singles_rating,
            player.mens_doubles_rating,
            player.womens_doubles_rating,
            player.mixed_doubles_rating
        ],
        parse_player_row,
    )
    .context("Failed to upsert player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        gender: decode_text(2, "gender", row.get(2)?, Gender::parse)?,
        singles_rating: row.get(3)?,
        mens_doubles_rating: row.get(4)?,
        womens_doubles_rating: row.get(5)?,
        mixed_doubles_rating: row.get(6)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Players keyed by id; ids without a record are simply absent.
pub fn find_many(conn: &Connection, ids: &[PlayerId]) -> Result<HashMap<PlayerId, Player>> {
    let mut players = HashMap::with_capacity(ids.len());
    for &id in ids {
        if let Some(player) = find_by_id(conn, id)? {
            players.insert(id, player);
        }
    }
    Ok(players)
}

pub fn update_rating(
    conn: &Connection,
    id: PlayerId,
    category: EventCategory,
    rating: Rating,
) -> Result<()> {
    let sql = format!("UPDATE players SET {} = ?1 WHERE id = ?2", rating_column(category));

    let updated = conn
        .execute(&sql, params![rating, id])
        .context("Failed to update player rating")?;
    if updated == 0 {
        return Err(crate::errors::not_found("player", id));
    }
    Ok(())
}

fn rating_column(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Singles => "singles_rating",
        EventCategory::MensDoubles => "mens_doubles_rating",
        EventCategory::WomensDoubles => "womens_doubles_rating",
        EventCategory::MixedDoubles => "mixed_doubles_rating",
    }
}
