//! CLI command implementations.

pub mod leaderboard;
pub mod play;
pub mod profile;
pub mod questions;
pub mod sync_status;
