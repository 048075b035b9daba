//! Error types for table output.

use std::path::PathBuf;

use covmin_transform::TransformError;
use thiserror::Error;

/// Errors that can occur while writing data tables.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Tables to concatenate have different columns.
    #[error("table {index} columns {found:?} do not match {expected:?}")]
    SchemaMismatch {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// No tables were given to concatenate.
    #[error("no tables to concatenate")]
    NothingToConcatenate,

    /// A table has no columns, so it has no entity column.
    #[error("table {index} has no entity column")]
    MissingEntityColumn { index: usize },

    /// Building a table frame failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
