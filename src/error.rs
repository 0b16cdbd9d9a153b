//! Crate error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to write high score to {}: {source}", .path.display())]
    HighScoreWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Injected by [`crate::MemoryStore`] to exercise the save-failure path
    #[error("high score store unavailable")]
    StoreUnavailable,
}
