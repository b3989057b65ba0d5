use crate::score::Award;

/// Result of answering a question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnswerOutcome {
    /// Correct answer; the question is resolved
    Correct { awarded: Award, total: f64 },
    /// Wrong answer with attempts left
    TryAgain { attempts_remaining: u8 },
    /// Wrong answer on the last attempt; no points for this question
    Exhausted { correct_index: usize },
}

/// Result of skipping a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipOutcome {
    /// Question set aside for later with attempts left
    Deferred { attempts_remaining: u8 },
    /// The skip used up the last attempt
    Exhausted,
}
