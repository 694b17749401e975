//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Canned - query the GitHub API through a recoverable fetch pipeline
#[derive(Parser, Debug)]
#[command(name = "canned")]
#[command(about = "Query the GitHub API through a recoverable fetch pipeline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Export spans to stdout through OpenTelemetry (filtered by RUST_LOG)
    #[arg(long, global = true)]
    pub telemetry: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile
    User {
        /// GitHub login
        username: String,

        /// Recover from failures instead of reporting them
        #[arg(long)]
        fallback: bool,
    },

    /// Search users by login, name or email
    Search {
        /// Search query
        query: String,

        /// Recover from failures with an empty result
        #[arg(long)]
        fallback: bool,
    },
}
