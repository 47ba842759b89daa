use anyhow::Result;
use log::info;
use rusqlite::TransactionBehavior;

use crate::config::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::{EventCategory, Match, Player, PlayerId, Registration, Session, SessionId};
use crate::draw;
use crate::errors::not_found;

/// Persisted result of drawing a session.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub session: Session,
    pub matches: Vec<Match>,
    pub empty_categories: Vec<EventCategory>,
}

pub struct DrawService {
    config: AppConfig,
    pool: DbPool,
}

impl DrawService {
    pub fn with_pool(config: AppConfig, pool: DbPool) -> Self {
        Self { config, pool }
    }

    /// Regenerates a session's draw. Reading the registrations, deleting the
    /// session's existing matches and inserting the new ones share one transaction.
    pub fn run(&self, session_id: SessionId) -> Result<DrawOutcome> {
        info!("=== Generating draws for session {} ===", session_id);
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let session = database::sessions::find_by_id(&tx, session_id)?
            .ok_or_else(|| not_found("session", session_id))?;
        let registrations = database::registrations::list_by_session(&tx, session_id)?;
        info!("  → {} registrations", registrations.len());

        let players = self.load_players(&tx, &registrations)?;
        let draw = draw::generate_draws(&session, &registrations, &players, &self.config);

        let removed = database::matches::delete_by_session(&tx, session_id)?;
        if removed > 0 {
            info!("  → Removed {} previously drawn matches", removed);
        }
        let matches = draw
            .matches
            .iter()
            .map(|drawn| database::matches::insert_match(&tx, drawn))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;
        info!("  → Saved {} matches", matches.len());

        Ok(DrawOutcome {
            session,
            matches,
            empty_categories: draw.empty_categories,
        })
    }

    fn load_players(
        &self,
        conn: &rusqlite::Connection,
        registrations: &[Registration],
    ) -> Result<std::collections::HashMap<PlayerId, Player>> {
        let ids: Vec<PlayerId> = registrations.iter().map(|r| r.player_id).collect();
        database::players::find_many(conn, &ids)
    }
}
