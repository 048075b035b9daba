//! Output naming and directory helpers.

use std::fs;
use std::path::Path;

use covmin_model::{EntityColumn, RunName};

use crate::error::{OutputError, Result};

/// Appended to the run name for per-run tables.
pub const RUN_TABLE_SUFFIX: &str = "_terra_data_table.tsv";

/// Leads the file name of a concatenated table.
pub const CONCATENATED_TABLE_PREFIX: &str = "terra_data_table_concatenated_";

/// `<run name>_terra_data_table.tsv`.
pub fn run_table_file_name(run: &RunName) -> String {
    format!("{run}{RUN_TABLE_SUFFIX}")
}

/// `terra_data_table_concatenated_<token>.tsv`.
pub fn concatenated_table_file_name(entity: &EntityColumn) -> String {
    format!("{CONCATENATED_TABLE_PREFIX}{}.tsv", entity.token())
}

/// Creates the output directory if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
