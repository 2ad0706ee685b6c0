pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extractor;
pub mod fetchers;
pub mod http;
pub mod locator;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::cli::{Command, LookupArgs};
use crate::config::AppConfig;
use crate::http::StatClient;
use crate::locator::Locator;
use crate::services::{MovesService, render};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_moves(lookup: &LookupArgs, json: bool) -> Result<()> {
    let request = lookup.to_request()?;
    info!("Running Smogon Stat Tool in moves mode");

    let runtime = build_runtime()?;
    runtime.block_on(async {
        let mut service = build_service(AppConfig::from_env())?;
        let report = service
            .run(&request)
            .await
            .context("Error showing moveset statistics")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", render(&report, &request));
        }
        Ok::<(), anyhow::Error>(())
    })
}

pub fn handle_locate(lookup: &LookupArgs) -> Result<()> {
    let request = lookup.to_request()?;

    let runtime = build_runtime()?;
    runtime.block_on(async {
        let mut service = build_service(AppConfig::from_env())?;
        let url = service
            .resolve_url(&request)
            .await
            .context("Error constructing stat URL")?;

        println!("{}", url);
        Ok::<(), anyhow::Error>(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_service(config: AppConfig) -> Result<MovesService<StatClient>> {
    let client = StatClient::new(&config.http)?;
    let locator = Locator::new(config.stats);
    Ok(MovesService::new(locator, client))
}

// One request at a time, so a single-threaded runtime is enough
fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
