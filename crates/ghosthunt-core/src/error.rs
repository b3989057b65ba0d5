use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Player name must not be empty")]
    InvalidPlayerName,

    #[error("Invalid contact address: {0:?}")]
    InvalidContact(String),

    #[error("No active session")]
    SessionNotActive,

    #[error("Session already started")]
    SessionAlreadyStarted,

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Option {index} out of range for question {question} ({options} options)")]
    OptionOutOfRange {
        question: String,
        index: usize,
        options: usize,
    },

    #[error("Question already resolved: {0}")]
    QuestionResolved(String),

    #[error("Question not resolved yet: {0}")]
    QuestionNotResolved(String),

    #[error("Target already collected: {0}")]
    TargetAlreadyCollected(String),

    #[error("Invalid question bank: {0}")]
    InvalidQuestionBank(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Sync error: {0}")]
    Sync(String),

    #[error("Persistence worker stopped")]
    WorkerStopped,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::StatusCode(status) => format!("HTTP {} error", status),
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::HostNotFound => format!("Host not found: {}", e),
            ureq::Error::ConnectionFailed => format!("Connection failed: {}", e),
            _ => format!("HTTP error: {}", e),
        };
        Error::Sync(message)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
