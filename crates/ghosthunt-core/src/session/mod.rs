//! Session bookkeeping.
//!
//! This module contains the game progress state for one play-through:
//! - `SessionPhase`, `EndReason` - lifecycle states
//! - `QuestionProgress` - per-question attempt state
//! - `AnswerOutcome`, `SkipOutcome` - results surfaced to the front end
//! - `SessionClock`, `ElapsedTicker` - elapsed time tracking and display ticks
//! - `Tracker` - the session state machine and scoring policy

mod clock;
mod outcome;
mod phase;
mod progress;
mod ticker;
mod tracker;

pub use clock::*;
pub use outcome::*;
pub use phase::*;
pub use progress::*;
pub use ticker::*;
pub use tracker::*;
