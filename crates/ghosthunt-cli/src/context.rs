//! Shared state built once per invocation: config, questions, and stores.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use ghosthunt_core::{
    GameConfig, JsonFileStore, ProfileCache, QuestionBank, RemoteSync, ReplicatedStore,
    ScoreReplica, ScoreStore, SyncStatus,
};
use tracing::{info, warn};

pub struct AppContext {
    pub config: GameConfig,
    pub bank: QuestionBank,
    pub store: Arc<dyn ScoreStore>,
    pub profiles: ProfileCache,
    pub sync_status: SyncStatus,
}

impl AppContext {
    /// Resolve config (args > env > default path), then open the stores.
    pub fn load(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(GameConfig::default_path);
        let mut config = GameConfig::load(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;
        if let Some(dir) = data_dir {
            config.data_dir = Some(dir.to_path_buf());
        }

        let bank = load_bank(&config)?;
        let data_dir = config.resolved_data_dir();
        info!("Using data directory {}", data_dir.display());

        let (remote, sync_status) = RemoteSync::bootstrap(&config.sync);
        if let SyncStatus::Disabled { reason } = &sync_status {
            info!("Remote sync disabled: {}", reason);
        }
        let replica = remote.map(|r| Box::new(r) as Box<dyn ScoreReplica>);
        let store = ReplicatedStore::new(JsonFileStore::new(&data_dir), replica);

        Ok(Self {
            config,
            bank,
            store: Arc::new(store),
            profiles: ProfileCache::new(&data_dir),
            sync_status,
        })
    }

    /// Score ceiling shown on the leaderboard: one full point per question.
    pub fn max_score(&self) -> usize {
        self.bank.len()
    }
}

fn load_bank(config: &GameConfig) -> Result<QuestionBank> {
    match &config.questions_file {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load questions from {}", path.display())),
        None => Ok(QuestionBank::builtin()),
    }
}

/// Cached profile, treating an unreadable cache as absent.
pub fn load_profile(profiles: &ProfileCache) -> Option<ghosthunt_core::PlayerProfile> {
    match profiles.load() {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Failed to read profile {}: {}", profiles.path().display(), e);
            None
        }
    }
}
