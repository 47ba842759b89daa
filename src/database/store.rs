use anyhow::{Context, Result};
use rusqlite::Connection;

use super::{players, rating_history};
use crate::domain::{EventCategory, MatchId, NewRatingHistory, Player, PlayerId, Rating, RatingHistory};
use crate::errors::store_context;
use crate::rating::RatingStore;

/// Rating store over a SQLite connection. Hand it a transaction to make a
/// rollback-and-recompute atomic.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl RatingStore for SqliteStore<'_> {
    fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        players::find_by_id(self.conn, id)
    }

    fn update_player_rating(
        &mut self,
        id: PlayerId,
        category: EventCategory,
        rating: Rating,
    ) -> Result<()> {
        players::update_rating(self.conn, id, category, rating)
            .with_context(|| store_context("update rating of", &format!("player {id}")))
    }

    fn rating_histories_by_match(&self, match_id: MatchId) -> Result<Vec<RatingHistory>> {
        rating_history::list_by_match(self.conn, match_id)
    }

    fn delete_rating_histories_by_match(&mut self, match_id: MatchId) -> Result<usize> {
        rating_history::delete_by_match(self.conn, match_id)
    }

    fn create_rating_history(&mut self, row: &NewRatingHistory) -> Result<RatingHistory> {
        rating_history::insert_history(self.conn, row)
            .with_context(|| store_context("record history for", &format!("player {}", row.player_id)))
    }
}
