//! Sample sheet loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use covmin_model::{SampleRecord, columns};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::grid::{SheetGrid, read_grid};
use crate::header::{canonical_column, find_header_row};
use crate::options::SheetOptions;

/// A parsed sample sheet.
#[derive(Debug, Clone)]
pub struct SampleSheet {
    /// Source file.
    pub path: PathBuf,
    /// Absolute sheet row (0-based) holding the column names.
    pub header_row: usize,
    /// Canonical column names in sheet order.
    pub columns: Vec<String>,
    /// Records with a non-empty identifier, in sheet order.
    pub records: Vec<SampleRecord>,
    /// Rows dropped for a missing identifier.
    pub dropped_rows: usize,
}

impl SampleSheet {
    /// Returns true if the sheet has the named canonical column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn has_primer_set(&self) -> bool {
        self.has_column(columns::PRIMER_SET)
    }
}

/// Reads and parses the sample sheet at `path`.
pub fn load_sample_sheet(path: &Path, options: &SheetOptions) -> Result<SampleSheet> {
    if !path.is_file() {
        return Err(IngestError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let grid = read_grid(path)?;
    sample_sheet_from_grid(path, &grid, options)
}

/// Parses an already-read grid. `path` is used for diagnostics only.
pub fn sample_sheet_from_grid(
    path: &Path,
    grid: &SheetGrid,
    options: &SheetOptions,
) -> Result<SampleSheet> {
    let header_index = find_header_row(grid, &options.header_markers, options.max_scan_rows)
        .ok_or_else(|| IngestError::HeaderNotFound {
            path: path.to_path_buf(),
            scanned: grid.len().min(options.max_scan_rows),
        })?;

    let header = &grid.rows()[header_index];
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut column_names = Vec::with_capacity(header.len());
    for (idx, raw) in header.iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let name = canonical_column(raw, &options.column_aliases);
        if positions.contains_key(&name) {
            warn!(
                path = %path.display(),
                column = %name,
                "duplicate column after alias normalization; keeping the first"
            );
            continue;
        }
        positions.insert(name.clone(), idx);
        column_names.push(name);
    }

    let required = |column: &str| {
        positions
            .get(column)
            .copied()
            .ok_or_else(|| IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
    };
    let alias_idx = required(columns::ALIAS)?;
    let barcode_idx = required(columns::BARCODE)?;
    let plate_name_idx = positions.get(columns::PLATE_NAME).copied();
    let plate_well_idx = positions.get(columns::PLATE_SAMPLE_WELL).copied();
    let primer_set_idx = positions.get(columns::PRIMER_SET).copied();

    let mut records = Vec::new();
    let mut dropped_rows = 0usize;
    for row in grid.rows().iter().skip(header_index + 1) {
        let cell = |idx: usize| row.get(idx).map(|value| value.trim()).unwrap_or_default();
        let optional = |idx: Option<usize>| idx.map(|idx| cell(idx).to_string());
        let alias = cell(alias_idx);
        if alias.is_empty() {
            dropped_rows += 1;
            continue;
        }
        records.push(SampleRecord {
            alias: alias.to_string(),
            barcode: cell(barcode_idx).to_string(),
            plate_name: optional(plate_name_idx),
            plate_well: optional(plate_well_idx),
            primer_set: optional(primer_set_idx),
        });
    }

    let header_row = grid.first_row() + header_index;
    debug!(
        path = %path.display(),
        header_row,
        columns = column_names.len(),
        rows = records.len(),
        dropped = dropped_rows,
        "sample sheet parsed"
    );

    Ok(SampleSheet {
        path: path.to_path_buf(),
        header_row,
        columns: column_names,
        records,
        dropped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> SheetGrid {
        SheetGrid::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    fn parse(rows: &[&[&str]]) -> Result<SampleSheet> {
        sample_sheet_from_grid(Path::new("COVMIN_0042.csv"), &grid(rows), &SheetOptions::default())
    }

    #[test]
    fn test_parses_records_after_preamble() {
        let sheet = parse(&[
            &["Experiment", "COVMIN_0042"],
            &["Alias", "Barcode", "Other_Name", "Well_Location"],
            &["S1", "NB01", "P1", "A1"],
            &["S2", "NB02", "P1", "B1"],
        ])
        .unwrap();
        assert_eq!(sheet.header_row, 1);
        assert_eq!(
            sheet.columns,
            vec!["Alias", "barcode", "plate_name", "plate_sample_well"]
        );
        assert_eq!(sheet.records.len(), 2);
        assert_eq!(sheet.records[1].alias, "S2");
        assert_eq!(sheet.records[1].barcode, "NB02");
        assert_eq!(sheet.records[1].plate_name.as_deref(), Some("P1"));
        assert_eq!(sheet.records[1].plate_well.as_deref(), Some("B1"));
        assert_eq!(sheet.records[1].primer_set, None);
        assert!(!sheet.has_primer_set());
    }

    #[test]
    fn test_drops_rows_without_identifier() {
        let sheet = parse(&[
            &["Sample_ID", "Barcode", "primer_set"],
            &["S1", "NB01", "ARTIC V3"],
            &["", "NB02", "ARTIC V3"],
            &["S3", "NB03", ""],
            &[],
        ])
        .unwrap();
        let aliases: Vec<&str> = sheet.records.iter().map(|r| r.alias.as_str()).collect();
        assert_eq!(aliases, vec!["S1", "S3"]);
        assert_eq!(sheet.dropped_rows, 2);
        assert!(sheet.has_primer_set());
        assert_eq!(sheet.records[1].primer_set.as_deref(), Some(""));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let sheet = parse(&[&["Alias", "Barcode", "Other_Name"], &["S1", "NB01"]]).unwrap();
        assert_eq!(sheet.records[0].plate_name.as_deref(), Some(""));
    }

    #[test]
    fn test_header_not_found() {
        let err = parse(&[&["Barcode", "Alias"], &["NB01", "S1"]]).unwrap_err();
        assert!(matches!(err, IngestError::HeaderNotFound { scanned: 2, .. }));
    }

    #[test]
    fn test_missing_barcode_column() {
        let err = parse(&[&["Alias", "Other_Name"], &["S1", "P1"]]).unwrap_err();
        match err {
            IngestError::MissingColumn { column, .. } => assert_eq!(column, "barcode"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_row_includes_grid_offset() {
        let grid = SheetGrid::with_offset(
            vec![
                vec!["Alias".to_string(), "Barcode".to_string()],
                vec!["S1".to_string(), "NB01".to_string()],
            ],
            4,
        );
        let sheet =
            sample_sheet_from_grid(Path::new("x.xlsx"), &grid, &SheetOptions::default()).unwrap();
        assert_eq!(sheet.header_row, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_sample_sheet(Path::new("/nonexistent/COVMIN_0001.xlsx"), &SheetOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::InputNotFound { .. }));
    }
}
