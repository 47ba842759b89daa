pub mod draws;
pub mod history;
pub mod import;
pub mod scoring;

use anyhow::Result;

use crate::config::AppConfig;
use crate::database::{self, DbPool};

/// Opens the configured database, creating the schema if it is missing.
pub fn open_pool(config: &AppConfig) -> Result<DbPool> {
    let pool = database::create_pool(&config.database.path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::ensure_schema(&conn)?;
    Ok(pool)
}
