use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Lifecycle of a session.
///
/// `NotStarted → Active → (Completed | ManuallyStopped)`. Terminal phases never
/// return to `Active`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr,
)]
pub enum SessionPhase {
    #[default]
    #[strum(serialize = "not started")]
    NotStarted,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "stopped")]
    ManuallyStopped,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::ManuallyStopped)
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum EndReason {
    /// Every target was collected
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "manual stop")]
    ManualStop,
}

impl EndReason {
    pub fn terminal_phase(&self) -> SessionPhase {
        match self {
            Self::Completed => SessionPhase::Completed,
            Self::ManualStop => SessionPhase::ManuallyStopped,
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(!SessionPhase::NotStarted.is_terminal());
        assert!(!SessionPhase::Active.is_terminal());
        assert!(SessionPhase::Completed.is_terminal());
        assert!(SessionPhase::ManuallyStopped.is_terminal());
    }

    #[test]
    fn test_end_reason_maps_to_phase() {
        assert_eq!(EndReason::Completed.terminal_phase(), SessionPhase::Completed);
        assert_eq!(
            EndReason::ManualStop.terminal_phase(),
            SessionPhase::ManuallyStopped
        );
        assert_eq!(EndReason::ManualStop.to_string(), "manual stop");
    }
}
