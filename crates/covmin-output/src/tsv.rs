//! Tab-separated table writing.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use covmin_transform::RunTable;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::common::{ensure_output_dir, run_table_file_name};
use crate::error::{OutputError, Result};

/// Writes `frame` to `path` as TSV with a header row and no index column.
pub fn write_frame_tsv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_output_dir(parent)?;
    }
    let mut file = File::create(path).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b'\t')
        .finish(frame)
        .map_err(|e| OutputError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Writes a run table to `<output_dir>/<run name>_terra_data_table.tsv`.
pub fn write_run_table(table: &RunTable, output_dir: &Path) -> Result<PathBuf> {
    let start = Instant::now();
    let path = output_dir.join(run_table_file_name(table.run()));
    let mut frame = table.to_frame()?;
    write_frame_tsv(&mut frame, &path)?;
    info!(
        run_name = %table.run(),
        path = %path.display(),
        rows = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "data table written"
    );
    Ok(path)
}
