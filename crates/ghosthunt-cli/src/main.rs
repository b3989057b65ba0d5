mod cli;
mod commands;
mod context;
mod prompter;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

use context::AppContext;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ghosthunt=warn,ghosthunt_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ctx = AppContext::load(args.config.as_deref(), args.data_dir.as_deref())?;

    match args.command {
        Command::Play { name, contact } => {
            commands::play::run_interactive(&ctx, name.as_deref(), contact.as_deref())
        }
        Command::Leaderboard { limit, json } => commands::leaderboard::run(&ctx, limit, json),
        Command::Profile { json } => commands::profile::run(&ctx, json),
        Command::Questions => commands::questions::run(&ctx),
        Command::SyncStatus => commands::sync_status::run(&ctx),
    }
}
