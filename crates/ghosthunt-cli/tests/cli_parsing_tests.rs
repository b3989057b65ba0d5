//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would touch the data dir).

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "ghosthunt")]
struct Args {
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Play {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },
    Leaderboard {
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    Profile {
        #[arg(long)]
        json: bool,
    },
    Questions,
    SyncStatus,
}

#[test]
fn test_subcommand_required() {
    assert!(Args::try_parse_from(["ghosthunt"]).is_err());
}

#[test]
fn test_parse_play() {
    let args = Args::try_parse_from(["ghosthunt", "play"]).unwrap();
    match args.command {
        Command::Play { name, contact } => {
            assert!(name.is_none());
            assert!(contact.is_none());
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_with_player() {
    let args = Args::try_parse_from([
        "ghosthunt",
        "play",
        "--name",
        "Alice",
        "--contact",
        "a@x.com",
    ])
    .unwrap();
    match args.command {
        Command::Play { name, contact } => {
            assert_eq!(name, Some("Alice".to_string()));
            assert_eq!(contact, Some("a@x.com".to_string()));
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_leaderboard_defaults() {
    let args = Args::try_parse_from(["ghosthunt", "leaderboard"]).unwrap();
    match args.command {
        Command::Leaderboard { limit, json } => {
            assert!(limit.is_none());
            assert!(!json);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_leaderboard_with_limit_and_json() {
    let args =
        Args::try_parse_from(["ghosthunt", "leaderboard", "--limit", "5", "--json"]).unwrap();
    match args.command {
        Command::Leaderboard { limit, json } => {
            assert_eq!(limit, Some(5));
            assert!(json);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_leaderboard_rejects_negative_limit() {
    let result = Args::try_parse_from(["ghosthunt", "leaderboard", "--limit", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_profile_with_json() {
    let args = Args::try_parse_from(["ghosthunt", "profile", "--json"]).unwrap();
    match args.command {
        Command::Profile { json } => assert!(json),
        _ => panic!("Expected Profile command"),
    }
}

#[test]
fn test_parse_questions_and_sync_status() {
    let args = Args::try_parse_from(["ghosthunt", "questions"]).unwrap();
    assert!(matches!(args.command, Command::Questions));

    let args = Args::try_parse_from(["ghosthunt", "sync-status"]).unwrap();
    assert!(matches!(args.command, Command::SyncStatus));
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "ghosthunt",
        "--config",
        "ghosts.toml",
        "--data-dir",
        "/tmp/ghosts",
        "questions",
    ])
    .unwrap();
    assert_eq!(args.config, Some(PathBuf::from("ghosts.toml")));
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/ghosts")));
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["ghosthunt", "invalid-command"]);
    assert!(result.is_err());
}
