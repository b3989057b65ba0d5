//! Configuration and tuning constants.
//!
//! This module contains:
//! - `GameConfig` - user configuration loaded from a TOML file
//! - Scoring, timer, leaderboard and profile constants

mod game_config;

pub use game_config::*;

/// Scoring policy.
///
/// A correct first answer earns a full point, a correct second answer half a
/// point. Two failed attempts exhaust the question.
pub mod scoring {
    /// Failed attempts after which a question is exhausted.
    pub const MAX_ATTEMPTS: u8 = 2;

    /// Points for a correct answer on the first attempt.
    pub const FULL_POINTS: f64 = 1.0;

    /// Points for a correct answer on the second attempt.
    pub const HALF_POINTS: f64 = 0.5;
}

/// Elapsed-time display refresh.
pub mod timer {
    use std::time::Duration;

    /// Cadence of the elapsed-time ticker.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}

pub mod leaderboard {
    /// Number of rows shown by default.
    pub const DEFAULT_SIZE: usize = 10;
}

/// Local player profile cache.
pub mod profile {
    /// Fixed key the profile record is stored under.
    pub const PROFILE_KEY: &str = "playerData";

    /// File name of the profile cache inside the data directory.
    pub const PROFILE_FILE: &str = "player_data.json";
}
