//! Concatenation of per-run tables.

use std::path::{Path, PathBuf};
use std::time::Instant;

use covmin_model::{EntityColumn, RunName};
use covmin_transform::RunTable;
use polars::prelude::DataFrame;
use tracing::info;

use crate::common::concatenated_table_file_name;
use crate::error::{OutputError, Result};
use crate::tsv::write_frame_tsv;

/// Rows of several runs under one shared entity column.
#[derive(Debug, Clone)]
pub struct ConcatenatedTable {
    pub entity: EntityColumn,
    pub runs: Vec<RunName>,
    pub frame: DataFrame,
}

impl ConcatenatedTable {
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }
}

/// Stacks frames row-wise after renaming each first column to `shared`.
///
/// The first column of every frame is its entity column. All remaining
/// columns must match the first frame's, order included. Table order and
/// row order within each table are preserved.
pub fn concatenate_frames(frames: Vec<DataFrame>, shared: &EntityColumn) -> Result<DataFrame> {
    let header = shared.header();
    let mut combined: Option<DataFrame> = None;
    let mut expected: Vec<String> = Vec::new();

    for (index, mut frame) in frames.into_iter().enumerate() {
        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let Some((entity, rest)) = names.split_first() else {
            return Err(OutputError::MissingEntityColumn { index });
        };
        frame.rename(entity, header.as_str().into())?;

        match combined.as_mut() {
            None => {
                expected = rest.to_vec();
                combined = Some(frame);
            }
            Some(accumulated) => {
                if rest != expected.as_slice() {
                    return Err(OutputError::SchemaMismatch {
                        index,
                        expected,
                        found: rest.to_vec(),
                    });
                }
                accumulated.vstack_mut(&frame)?;
            }
        }
    }

    combined.ok_or(OutputError::NothingToConcatenate)
}

/// Concatenates run tables under `shared`.
pub fn concatenate_tables(tables: &[RunTable], shared: &EntityColumn) -> Result<ConcatenatedTable> {
    let frames = tables
        .iter()
        .map(RunTable::to_frame)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let frame = concatenate_frames(frames, shared)?;
    Ok(ConcatenatedTable {
        entity: shared.clone(),
        runs: tables.iter().map(|table| table.run().clone()).collect(),
        frame,
    })
}

/// Writes `table` to `<output_dir>/terra_data_table_concatenated_<token>.tsv`.
pub fn write_concatenated(table: &mut ConcatenatedTable, output_dir: &Path) -> Result<PathBuf> {
    let start = Instant::now();
    let path = output_dir.join(concatenated_table_file_name(&table.entity));
    write_frame_tsv(&mut table.frame, &path)?;
    info!(
        entity = %table.entity,
        runs = table.runs.len(),
        path = %path.display(),
        rows = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "concatenated data table written"
    );
    Ok(path)
}
