//! Error types for publishing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while copying files to remote storage.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The file to publish does not exist.
    #[error("file to publish not found: {path}")]
    MissingLocal { path: PathBuf },

    /// The copy command could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The copy command exited unsuccessfully.
    #[error("{program} failed copying {local} to {remote} ({status}): {stderr}")]
    CommandFailed {
        program: String,
        local: PathBuf,
        remote: String,
        status: String,
        stderr: String,
    },

    /// Copying into the local mirror failed.
    #[error("failed to copy {local} to {destination}: {source}")]
    Copy {
        local: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for publish operations.
pub type Result<T> = std::result::Result<T, PublishError>;
