use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::profile::{PROFILE_FILE, PROFILE_KEY};
use crate::error::Result;
use crate::score::ScoreRecord;

/// Locally cached player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub contact: String,
    pub name: String,
    pub high_score: f64,
    pub total_time_played: f64,
    pub games_played: u32,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            name: name.into(),
            high_score: 0.0,
            total_time_played: 0.0,
            games_played: 0,
        }
    }

    /// Fold a finished session into the profile totals.
    pub fn record_game(&mut self, record: &ScoreRecord) {
        self.high_score = self.high_score.max(record.score);
        self.total_time_played += record.elapsed_seconds;
        self.games_played += 1;
    }

    pub fn has_played(&self) -> bool {
        self.games_played > 0
    }
}

/// Single-record profile cache stored under a fixed key.
///
/// Read and written wholesale; there are no partial updates.
pub struct ProfileCache {
    path: PathBuf,
}

impl ProfileCache {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(PROFILE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<PlayerProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let mut entries: HashMap<String, PlayerProfile> = serde_json::from_str(&content)?;
        Ok(entries.remove(PROFILE_KEY))
    }

    pub fn save(&self, profile: &PlayerProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let entries = HashMap::from([(PROFILE_KEY, profile)]);
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        debug!("Saved profile for {}", profile.name);
        Ok(())
    }
}
