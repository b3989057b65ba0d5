use crate::config::scoring::MAX_ATTEMPTS;
use crate::score::Award;

/// Attempt state of one question within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionProgress {
    #[default]
    Unattempted,
    /// Failed or skipped attempts so far, always below `MAX_ATTEMPTS`
    Attempted(u8),
    /// No further attempts accepted; `Award::None` means exhausted
    Resolved(Award),
}

impl QuestionProgress {
    pub fn failed_attempts(&self) -> u8 {
        match self {
            Self::Unattempted => 0,
            Self::Attempted(n) => *n,
            Self::Resolved(_) => MAX_ATTEMPTS,
        }
    }

    pub fn attempts_remaining(&self) -> u8 {
        match self {
            Self::Resolved(_) => 0,
            other => MAX_ATTEMPTS - other.failed_attempts(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Resolved(Award::None))
    }

    /// State after one more failed attempt.
    pub(crate) fn after_failure(&self) -> Self {
        let next = self.failed_attempts() + 1;
        if next >= MAX_ATTEMPTS {
            Self::Resolved(Award::None)
        } else {
            Self::Attempted(next)
        }
    }
}
