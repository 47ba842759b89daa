pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod draw;
pub mod errors;
pub mod rating;
pub mod report;
pub mod services;

use std::collections::HashMap;
use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::config::AppConfig;
use crate::database::DbPool;
use crate::domain::PlayerId;
use crate::errors::not_found;
use crate::services::draws::DrawService;
use crate::services::history::HistoryService;
use crate::services::import::ImportService;
use crate::services::scoring::{parse_set_scores, ScoringService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn config_for(cli: &Cli) -> AppConfig {
    match &cli.database {
        Some(path) => AppConfig::new().with_database_path(path),
        None => AppConfig::new(),
    }
}

fn roster(pool: &DbPool) -> Result<HashMap<PlayerId, String>> {
    let conn = database::get_connection(pool)?;
    Ok(report::name_index(&database::players::list_all(&conn)?))
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    let pool = database::create_pool(&config.database.path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)?;
    info!("Database initialised at {}", config.database.path);
    Ok(())
}

pub fn handle_import(config: &AppConfig, file: &Path) -> Result<()> {
    let service = ImportService::new(config)?;
    service.run(file)
}

pub fn handle_draw(config: AppConfig, session_id: i32) -> Result<()> {
    let pool = services::open_pool(&config)?;
    let outcome = DrawService::with_pool(config, pool.clone()).run(session_id)?;
    report::print_draw(&outcome, &roster(&pool)?);
    Ok(())
}

pub fn handle_score(config: AppConfig, match_id: i32, team1: &str, team2: &str) -> Result<()> {
    let scores = parse_set_scores(team1, team2)?;
    let pool = services::open_pool(&config)?;
    let outcome = ScoringService::with_pool(config, pool.clone()).record_score(match_id, scores)?;
    report::print_changes(&outcome.scored, &outcome.changes, &roster(&pool)?);
    Ok(())
}

pub fn handle_rate(config: AppConfig, match_id: i32) -> Result<()> {
    let pool = services::open_pool(&config)?;
    let outcome = ScoringService::with_pool(config, pool.clone()).reprocess(match_id)?;
    report::print_changes(&outcome.scored, &outcome.changes, &roster(&pool)?);
    Ok(())
}

pub fn handle_history(config: &AppConfig, player_id: i32, event: Option<&str>) -> Result<()> {
    let pool = services::open_pool(config)?;
    let rows = HistoryService::with_pool(pool.clone()).player_history(player_id, event)?;

    let conn = database::get_connection(&pool)?;
    let player = database::players::find_by_id(&conn, player_id)?
        .ok_or_else(|| not_found("player", player_id))?;
    report::print_history(&player, &rows);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
