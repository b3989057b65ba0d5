use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identity of a score record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one finished session. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub score: f64,
    pub elapsed_seconds: f64,
    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Create a record with a fresh id and the current timestamp.
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        score: f64,
        elapsed_seconds: f64,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            contact: contact.into(),
            score,
            elapsed_seconds: elapsed_seconds.max(0.0),
            created_at: Utc::now(),
        }
    }
}
