pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod scoring;
pub mod services;
pub mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;
use crate::domain::TournamentId;
use crate::services::{CompletionService, LeaderboardService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database.path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)
}

pub fn handle_leaderboard(tournament_id: TournamentId) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;
    let service = LeaderboardService::new(store, config.prizes);

    let board = service.compute_leaderboard(tournament_id)?;
    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}

pub fn handle_complete(tournament_id: TournamentId) -> Result<()> {
    let config = AppConfig::new();
    let store = open_store(&config)?;
    let service = CompletionService::new(store);

    let summary = service.complete_tournament(tournament_id)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    let pool = database::create_pool(&config.database.path)?;
    Ok(SqliteStore::new(pool))
}
