use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::score::ScoreRecord;
use crate::storage::ScoreStore;

pub const SCORES_FILE: &str = "scores.json";

/// Score store backed by a JSON array file.
///
/// The whole file is rewritten on each save through a temporary file and a
/// rename, so readers never see a partial write.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store at `<data_dir>/scores.json`. The directory is created on first save.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::at_path(data_dir.as_ref().join(SCORES_FILE))
    }

    pub fn at_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records, failing on unreadable or malformed files.
    pub fn load(&self) -> Result<Vec<ScoreRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, records: &[ScoreRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(records)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn save(&self, record: &ScoreRecord) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load()?;
        if records.iter().any(|r| r.id == record.id) {
            debug!("Record {} already stored", record.id);
            return Ok(());
        }
        records.push(record.clone());
        self.write_all(&records)?;

        info!(
            "Saved score for {}: {:.1} in {:.2}s",
            record.name, record.score, record.elapsed_seconds
        );
        Ok(())
    }

    fn fetch_all(&self) -> Vec<ScoreRecord> {
        match self.load() {
            Ok(records) => {
                debug!("Fetched {} scores from {}", records.len(), self.path.display());
                records
            }
            Err(e) => {
                warn!("Failed to read scores from {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data"));
        (store, temp_dir)
    }

    #[test]
    fn test_fetch_from_missing_file_is_empty() {
        let (store, _temp) = create_temp_store();
        assert!(store.fetch_all().is_empty());
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let (store, _temp) = create_temp_store();
        store.save_score("Alice", "a@x.com", 4.0, 31.5).unwrap();

        assert!(store.path().exists());
        let content = fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_records_survive_reopen() {
        let (store, temp) = create_temp_store();
        let a = store.save_score("Alice", "a@x.com", 4.0, 31.5).unwrap();
        let b = store.save_score("Bob", "b@x.com", 2.5, 12.0).unwrap();

        let reopened = JsonFileStore::new(temp.path().join("data"));
        assert_eq!(reopened.fetch_all(), vec![a, b]);
    }

    #[test]
    fn test_duplicate_id_is_not_written_twice() {
        let (store, _temp) = create_temp_store();
        let record = ScoreRecord::new("Alice", "a@x.com", 1.0, 1.0);
        store.save(&record).unwrap();
        store.save(&record).unwrap();
        assert_eq!(store.fetch_all().len(), 1);
    }

    #[test]
    fn test_malformed_file_fetches_empty_but_load_errors() {
        let (store, _temp) = create_temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.fetch_all().is_empty());
        assert!(store.load().is_err());
        assert!(store.save(&ScoreRecord::new("A", "a@x", 1.0, 1.0)).is_err());
    }
}
