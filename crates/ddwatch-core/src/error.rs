use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("log file not found: {}", .0.display())]
    LogMissing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to {}: {source}", path.display())]
    AppendLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl StatusError {
    /// True when the failure means "there is nothing to read yet" rather than
    /// an operational fault.
    pub fn is_missing_log(&self) -> bool {
        matches!(self, StatusError::LogMissing(_))
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
