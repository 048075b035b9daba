//! Error types for sample sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and reading sample sheets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory holds no sample sheets.
    #[error("no sample sheets found in {path}")]
    NoSampleSheets { path: PathBuf },

    /// File extension is not a supported sheet format.
    #[error("unsupported sample sheet format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Workbook could not be opened or decoded.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("workbook has no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// CSV sheet could not be parsed.
    #[error("failed to parse CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header marker row in the scan window.
    #[error("could not find a sample header row in the first {scanned} rows of {path}")]
    HeaderNotFound { path: PathBuf, scanned: usize },

    // === Schema Errors ===
    /// Required column missing after alias normalization.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
