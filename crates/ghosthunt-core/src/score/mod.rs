//! Score types.
//!
//! - `Award` - points granted for one question
//! - `Points` - exact running total in half-point units
//! - `ScoreRecord` - immutable outcome of one finished session

mod award;
mod record;

pub use award::*;
pub use record::*;
