//! Terra data table output.
//!
//! Writes [`RunTable`](covmin_transform::RunTable)s as tab-separated files
//! and combines several runs into one table under a shared entity column.

mod common;
mod concat;
mod error;
mod tsv;

pub use common::{
    CONCATENATED_TABLE_PREFIX, RUN_TABLE_SUFFIX, concatenated_table_file_name, ensure_output_dir,
    run_table_file_name,
};
pub use concat::{ConcatenatedTable, concatenate_frames, concatenate_tables, write_concatenated};
pub use error::{OutputError, Result};
pub use tsv::{write_frame_tsv, write_run_table};
