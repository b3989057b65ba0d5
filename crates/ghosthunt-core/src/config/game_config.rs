use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::leaderboard::DEFAULT_SIZE;
use crate::config::timer::TICK_INTERVAL;
use crate::error::Result;

const APP_DIR_NAME: &str = "ghosthunt";
const FALLBACK_DATA_DIR: &str = "ghosthunt-data";
const CONFIG_FILE: &str = "config.toml";

/// Remote replication settings. Sync stays disabled unless both fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
}

impl SyncConfig {
    /// Endpoint and token, if both are configured and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let endpoint = self.endpoint.as_deref().filter(|s| !s.trim().is_empty())?;
        let token = self.token.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((endpoint, token))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding the score store and profile cache.
    pub data_dir: Option<PathBuf>,
    /// JSON question bank replacing the built-in questions.
    pub questions_file: Option<PathBuf>,
    /// When false (the default), a player with a recorded game only sees the
    /// leaderboard.
    pub allow_replay: bool,
    pub leaderboard_size: usize,
    pub tick_interval_ms: u64,
    pub sync: SyncConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            questions_file: None,
            allow_replay: false,
            leaderboard_size: DEFAULT_SIZE,
            tick_interval_ms: TICK_INTERVAL.as_millis() as u64,
            sync: SyncConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Platform config location, e.g. `~/.config/ghosthunt/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Effective data directory: configured value, platform data dir, or a local fallback.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    pub fn tick_interval(&self) -> Duration {
        if self.tick_interval_ms == 0 {
            TICK_INTERVAL
        } else {
            Duration::from_millis(self.tick_interval_ms)
        }
    }
}
