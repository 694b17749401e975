//! Canned CLI binary.
//!
//! Looks up GitHub users through the fetch pipeline. Errors that no mapper
//! recovered are collected in the error queue and printed before exit.

use canned::{CannedConfig, ErrorHandlerState, GithubClient, init_telemetry, shutdown_telemetry};
use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, drain_error_queue, search_users, show_user};

    // Load .env before reading the token variable
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.telemetry {
        init_telemetry("canned")?;
    } else {
        let log_level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = CannedConfig::load()?;
    let client = GithubClient::new(config.github().clone());
    let errors = ErrorHandlerState::new();

    match cli.command {
        Commands::User { username, fallback } => {
            show_user(&client, &errors, &username, fallback).await;
        }
        Commands::Search { query, fallback } => {
            search_users(&client, &errors, &query, fallback).await;
        }
    }

    let unhandled = drain_error_queue(&errors);

    if cli.telemetry {
        shutdown_telemetry();
    }

    Ok(if unhandled == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
