use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the core library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key file not found: {}", path.display())]
    CredentialMissing { path: PathBuf },

    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[source] serde_json::Error),

    #[error("Could not determine platform config directory")]
    ConfigDirUnavailable,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid forecast response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
