//! Quiz content.
//!
//! - `Question`, `QuestionId` - a single trivia question and its target name
//! - `QuestionBank` - validated, ordered question set (built-in or loaded from JSON)

mod bank;
mod question;

pub use bank::*;
pub use question::*;
