use crate::error::Result;
use crate::score::ScoreRecord;

/// Durable storage for score records.
///
/// Returned lists carry no ordering guarantee; rank them before display.
pub trait ScoreStore: Send + Sync {
    /// Persist a record.
    fn save(&self, record: &ScoreRecord) -> Result<()>;

    /// All stored records. Failures are logged and yield an empty list.
    fn fetch_all(&self) -> Vec<ScoreRecord>;

    /// Build a record from its parts and persist it.
    fn save_score(
        &self,
        name: &str,
        contact: &str,
        score: f64,
        elapsed_seconds: f64,
    ) -> Result<ScoreRecord> {
        let record = ScoreRecord::new(name, contact, score, elapsed_seconds);
        self.save(&record)?;
        Ok(record)
    }
}
