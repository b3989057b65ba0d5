//! Leaderboard ordering and display.
//!
//! - `rank`, `rank_of` - ordering of score records (best first)
//! - `Leaderboard` - ranked snapshot handed to the front end
//! - `format_leaderboard` - console rendering

mod display;
mod ranker;

pub use display::*;
pub use ranker::*;
