use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::Result;
use crate::score::ScoreRecord;
use crate::storage::{ScoreReplica, ScoreStore};

/// Local store with optional remote replication.
///
/// Local writes are authoritative: their errors propagate. Remote failures are
/// logged and otherwise ignored.
pub struct ReplicatedStore<S: ScoreStore> {
    local: S,
    replica: Option<Box<dyn ScoreReplica>>,
}

impl<S: ScoreStore> ReplicatedStore<S> {
    pub fn new(local: S, replica: Option<Box<dyn ScoreReplica>>) -> Self {
        Self { local, replica }
    }

    pub fn local_only(local: S) -> Self {
        Self::new(local, None)
    }

    pub fn is_replicated(&self) -> bool {
        self.replica.is_some()
    }

    pub fn local(&self) -> &S {
        &self.local
    }
}

impl<S: ScoreStore> ScoreStore for ReplicatedStore<S> {
    fn save(&self, record: &ScoreRecord) -> Result<()> {
        self.local.save(record)?;
        if let Some(replica) = &self.replica
            && let Err(e) = replica.push(record)
        {
            warn!("Failed to replicate score {}: {}", record.id, e);
        }
        Ok(())
    }

    fn fetch_all(&self) -> Vec<ScoreRecord> {
        let local = self.local.fetch_all();
        let Some(replica) = &self.replica else {
            return local;
        };

        match replica.pull() {
            Ok(remote) => {
                let merged = merge_records(local, remote);
                debug!("Merged leaderboard has {} records", merged.records.len());
                for record in &merged.pulled {
                    if let Err(e) = self.local.save(record) {
                        warn!("Failed to cache remote score {}: {}", record.id, e);
                    }
                }
                merged.records
            }
            Err(e) => {
                warn!("Failed to fetch remote scores: {}", e);
                local
            }
        }
    }
}

struct Merged {
    records: Vec<ScoreRecord>,
    /// Remote records that were not known locally
    pulled: Vec<ScoreRecord>,
}

fn merge_records(local: Vec<ScoreRecord>, remote: Vec<ScoreRecord>) -> Merged {
    let mut seen: HashSet<_> = local.iter().map(|r| r.id).collect();
    let pulled: Vec<ScoreRecord> = remote
        .into_iter()
        .filter(|r| seen.insert(r.id))
        .collect();

    let mut records = local;
    records.extend(pulled.iter().cloned());
    Merged { records, pulled }
}
