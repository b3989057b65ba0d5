//! # ghosthunt-core
//!
//! Core library for the ghost hunt quiz game.
//!
//! This crate provides:
//! - Question bank and quiz content
//! - Session progress tracking and the scoring policy
//! - Leaderboard ranking and console rendering
//! - Score persistence (local JSON, optional remote replication) and the
//!   player profile cache
//! - A background persistence worker publishing completion events

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod quiz;
pub mod score;
pub mod session;
pub mod signal;
pub mod storage;

// Re-export from config module
pub use config::{GameConfig, SyncConfig};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from leaderboard module
pub use leaderboard::{Leaderboard, format_entry, format_leaderboard, rank, rank_of};

// Re-export from quiz module
pub use quiz::{Question, QuestionBank, QuestionId};

// Re-export from score module
pub use score::{Award, Points, RecordId, ScoreRecord};

// Re-export from session module
pub use session::{
    AnswerOutcome, ElapsedTicker, EndReason, Player, QuestionProgress, SessionClock,
    SessionPhase, SkipOutcome, Tracker,
};

pub use signal::ShutdownSignal;

// Re-export from storage module
pub use storage::{
    JsonFileStore, MemoryStore, PersistenceWorker, PlayerProfile, ProfileCache, RemoteSync,
    ReplicatedStore, ScoreReplica, ScoreStore, StoreEvent, SyncStatus,
};
