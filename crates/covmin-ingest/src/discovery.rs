//! Sample sheet discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::grid::SheetFormat;

/// Lists sample sheets in a directory.
///
/// Returns regular files with a supported extension, sorted by file name.
/// Office lock files (`~$...`) are skipped.
pub fn list_sample_sheets(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_lock_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("~$"));
        if is_lock_file {
            continue;
        }
        if SheetFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Expands an input path into the sample sheets to process.
///
/// A file is returned as-is; a directory is listed with
/// [`list_sample_sheets`] and must contain at least one sheet.
pub fn resolve_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(IngestError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    let files = list_sample_sheets(input)?;
    if files.is_empty() {
        return Err(IngestError::NoSampleSheets {
            path: input.to_path_buf(),
        });
    }
    Ok(files)
}
