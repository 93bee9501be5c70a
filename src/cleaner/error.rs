// Error types for the cleaner
// Configuration-phase errors are fatal, everything else is scoped to one rule

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading configuration or processing a rule
#[derive(Debug, Error)]
pub enum CleanerError {
    /// The configuration environment variable is unset or empty
    #[error("environment variable {var} is not set")]
    MissingConfigEnv { var: &'static str },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// The glob engine only accepts UTF-8 search patterns
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("failed to remove {}: {source}", path.display())]
    DeleteFailed { path: PathBuf, source: io::Error },

    /// The task processing a rule panicked or was cancelled
    #[error("cleanup task for {} aborted: {reason}", root.display())]
    TaskAborted { root: PathBuf, reason: String },
}

impl CleanerError {
    /// Whether the error aborts the whole run rather than a single rule
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CleanerError::MissingConfigEnv { .. }
                | CleanerError::ConfigRead { .. }
                | CleanerError::ConfigParse { .. }
        )
    }
}
