//! Error type shared by every storage backend.
//!
//! Local and remote backends report failures through the same enum, so a
//! caller of the storage facade sees one contract no matter which backend
//! answered.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Invalid station: {0}")]
    InvalidStation(String),

    #[error("No active session. Run liveradio auth sign-in")]
    Unauthenticated,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorageError {
    /// True when the backend service refused the caller's session.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            StorageError::Unauthenticated => true,
            StorageError::Rejected { status, .. } => *status == StatusCode::UNAUTHORIZED,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
