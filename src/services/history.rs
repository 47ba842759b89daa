use anyhow::{anyhow, Result};

use crate::database::{self, DbPool};
use crate::domain::{EventCategory, PlayerId, RatingHistory};
use crate::errors::not_found;

pub struct HistoryService {
    pool: DbPool,
}

impl HistoryService {
    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// A player's rating history, newest first, optionally for one event.
    pub fn player_history(
        &self,
        player_id: PlayerId,
        event: Option<&str>,
    ) -> Result<Vec<RatingHistory>> {
        let conn = database::get_connection(&self.pool)?;
        if database::players::find_by_id(&conn, player_id)?.is_none() {
            return Err(not_found("player", player_id));
        }

        let label = event
            .map(|e| {
                EventCategory::parse(e)
                    .map(|category| category.label())
                    .ok_or_else(|| anyhow!("Unknown event type '{e}'"))
            })
            .transpose()?;

        database::rating_history::list_by_player(&conn, player_id, label)
    }
}
