use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error type for running the application.
#[derive(Debug, Error)]
pub enum KanaQuizError {
    /// Error loading settings.
    #[error("Failed to load settings: {0}")]
    Settings(#[from] ConfigError),
    /// IO error during terminal handling.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
