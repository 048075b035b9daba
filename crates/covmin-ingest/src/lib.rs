//! Sample sheet ingestion.
//!
//! Nanopore sample sheets are spreadsheets with a free-form preamble above
//! the sample table. This crate locates the table by scanning for a header
//! marker, normalizes historical column names, and yields one
//! [`SampleRecord`](covmin_model::SampleRecord) per sample.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use covmin_ingest::{SheetOptions, load_sample_sheet, resolve_inputs};
//!
//! let options = SheetOptions::default();
//! for path in resolve_inputs(Path::new("sheets/"))? {
//!     let sheet = load_sample_sheet(&path, &options)?;
//!     println!("{}: {} samples", path.display(), sheet.records.len());
//! }
//! ```

mod discovery;
mod error;
mod grid;
mod header;
mod loader;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use grid::{SheetFormat, SheetGrid, read_grid};
pub use header::{canonical_column, find_header_row};
pub use loader::{SampleSheet, load_sample_sheet, sample_sheet_from_grid};

// === Options ===
pub use options::{DEFAULT_MAX_SCAN_ROWS, SheetOptions, default_column_aliases, default_header_markers};

// === File Discovery ===
pub use discovery::{list_sample_sheets, resolve_inputs};
