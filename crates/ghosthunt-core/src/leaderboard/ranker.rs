use std::cmp::Ordering;

use crate::score::{RecordId, ScoreRecord};

/// Ordering used by the leaderboard: higher score first, then faster time.
pub fn compare_records(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    sort_key(b.score)
        .total_cmp(&sort_key(a.score))
        .then_with(|| sort_key(a.elapsed_seconds).total_cmp(&sort_key(b.elapsed_seconds)))
}

/// `-0.0` and `0.0` must compare equal; `total_cmp` alone orders them by sign.
fn sort_key(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Sort records best first. Exact ties keep their input order.
pub fn rank(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(compare_records);
    records
}

/// Position of a record after ranking, matched by identity.
pub fn rank_of(records: &[ScoreRecord], target: &RecordId) -> Option<usize> {
    let mut ranked: Vec<&ScoreRecord> = records.iter().collect();
    ranked.sort_by(|a, b| compare_records(a, b));
    ranked.iter().position(|r| &r.id == target)
}

/// Ranked snapshot of all known records.
///
/// Owned by whoever fetched it; refreshed by fetching again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self {
            entries: rank(records),
        }
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.entries.iter().position(|r| &r.id == id)
    }

    pub fn get(&self, id: &RecordId) -> Option<&ScoreRecord> {
        self.entries.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
