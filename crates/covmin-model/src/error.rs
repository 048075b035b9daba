//! Error types for the data model.

use thiserror::Error;

/// Errors raised while validating run names, entity columns and bucket paths.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Run name was empty after trimming.
    #[error("run name is empty")]
    EmptyRunName,

    /// Run name does not follow the `<PREFIX>_<NUMBER>` convention.
    #[error("run name '{value}' must follow format \"{prefix}_0000\"")]
    InvalidRunName { value: String, prefix: String },

    /// The configured run prefix produced an unusable pattern.
    #[error("invalid run name pattern for prefix '{prefix}': {source}")]
    InvalidRunPattern {
        prefix: String,
        #[source]
        source: regex::Error,
    },

    /// Entity column token was empty after stripping.
    #[error("entity column name '{raw}' leaves an empty token")]
    EmptyEntityToken { raw: String },

    /// No entity columns were supplied to combine.
    #[error("no entity columns to combine")]
    NoEntityColumns,

    /// Bucket path has no bucket name.
    #[error("invalid bucket path '{value}'")]
    InvalidBucketPath { value: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
