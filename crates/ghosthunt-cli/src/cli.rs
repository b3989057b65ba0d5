//! CLI argument definitions for ghosthunt.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghosthunt")]
#[command(about = "Ghost hunt quiz game", version)]
pub struct Args {
    /// Path to config file
    #[arg(long, value_name = "FILE", env = "GHOSTHUNT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for scores and the player profile
    #[arg(long, value_name = "DIR", env = "GHOSTHUNT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a session
    Play {
        /// Player name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
        /// Player email (prompted if omitted)
        #[arg(long)]
        contact: Option<String>,
    },
    /// Show the leaderboard
    Leaderboard {
        /// Number of rows to show (defaults to the configured size)
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the cached player profile
    Profile {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the active question bank
    Questions,
    /// Report whether remote sync is enabled
    SyncStatus,
}
