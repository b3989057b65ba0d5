use std::time::Duration;

use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::score::ScoreRecord;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote copy of the score records.
pub trait ScoreReplica: Send + Sync {
    fn push(&self, record: &ScoreRecord) -> Result<()>;
    fn pull(&self) -> Result<Vec<ScoreRecord>>;
}

/// Whether remote replication is in use, and why not if it isn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Enabled { endpoint: String },
    Disabled { reason: String },
}

impl SyncStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled { endpoint } => write!(f, "sync enabled ({})", endpoint),
            Self::Disabled { reason } => write!(f, "sync disabled: {}", reason),
        }
    }
}

/// HTTP client for the score backend.
pub struct RemoteSync {
    agent: ureq::Agent,
    endpoint: String,
    token: String,
}

impl RemoteSync {
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        let endpoint = endpoint.trim().trim_end_matches('/');
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(Error::Sync(format!("Invalid endpoint URL: {}", endpoint)));
        }

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();
        let agent: ureq::Agent = config.into();

        Ok(Self {
            agent,
            endpoint: endpoint.to_string(),
            token: token.trim().to_string(),
        })
    }

    /// Set up replication from configuration.
    ///
    /// Any problem (missing credentials, bad URL, unreachable backend) disables
    /// sync instead of failing, so the game keeps working locally.
    pub fn bootstrap(config: &SyncConfig) -> (Option<Self>, SyncStatus) {
        let Some((endpoint, token)) = config.credentials() else {
            return (
                None,
                SyncStatus::Disabled {
                    reason: "no endpoint or token configured".to_string(),
                },
            );
        };

        let sync = match Self::new(endpoint, token) {
            Ok(sync) => sync,
            Err(e) => {
                warn!("Remote sync unavailable: {}", e);
                return (None, SyncStatus::Disabled { reason: e.to_string() });
            }
        };

        if let Err(e) = sync.check_available() {
            warn!("Remote sync unavailable: {}", e);
            return (None, SyncStatus::Disabled { reason: e.to_string() });
        }

        info!("Remote sync enabled ({})", sync.endpoint);
        let status = SyncStatus::Enabled {
            endpoint: sync.endpoint.clone(),
        };
        (Some(sync), status)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Health probe against the backend.
    pub fn check_available(&self) -> Result<()> {
        self.agent
            .get(&self.url("api/health"))
            .header("Authorization", &self.bearer())
            .call()?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl ScoreReplica for RemoteSync {
    fn push(&self, record: &ScoreRecord) -> Result<()> {
        self.agent
            .post(&self.url("api/scores"))
            .header("Authorization", &self.bearer())
            .send_json(record)?;
        Ok(())
    }

    fn pull(&self) -> Result<Vec<ScoreRecord>> {
        let mut response = self
            .agent
            .get(&self.url("api/scores"))
            .header("Authorization", &self.bearer())
            .call()?;
        let records = response.body_mut().read_json::<Vec<ScoreRecord>>()?;
        Ok(records)
    }
}
