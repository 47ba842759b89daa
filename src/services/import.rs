use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::{Player, Registration, Session};

/// Club data to load: players, sessions and who registered for what.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

impl Fixture {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse fixture {}", path.display()))
    }
}

pub struct ImportService {
    pool: DbPool,
}

impl ImportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            pool: super::open_pool(config)?,
        })
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        info!("=== Importing fixture {} ===", path.as_ref().display());
        let fixture = Fixture::load(path)?;
        self.import(&fixture)
    }

    /// Upserts everything in one transaction.
    pub fn import(&self, fixture: &Fixture) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction()?;

        for player in &fixture.players {
            database::players::upsert_player(&tx, player)?;
        }
        info!("  → {} players", fixture.players.len());

        for session in &fixture.sessions {
            database::sessions::upsert_session(&tx, session)?;
        }
        info!("  → {} sessions", fixture.sessions.len());

        for registration in &fixture.registrations {
            database::registrations::upsert_registration(&tx, registration)?;
        }
        info!("  → {} registrations", fixture.registrations.len());

        tx.commit().context("Failed to commit fixture import")
    }
}
