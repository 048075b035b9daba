//! Raw cell grids read from workbook and CSV sample sheets.
//!
//! Every cell is converted to trimmed text so identifiers such as `0042` or
//! `7` never become numbers downstream.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Sample sheet file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Excel or OpenDocument workbook; the first worksheet is read.
    Workbook,
    /// Comma-separated text.
    Csv,
}

impl SheetFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Rows of text cells, plus the absolute index of the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
    first_row: usize,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows, first_row: 0 }
    }

    /// Grid whose first row sits at `first_row` in the source sheet.
    pub fn with_offset(rows: Vec<Vec<String>>, first_row: usize) -> Self {
        Self { rows, first_row }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Absolute sheet row (0-based) of grid row 0.
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a sample sheet into a [`SheetGrid`].
pub fn read_grid(path: &Path) -> Result<SheetGrid> {
    match SheetFormat::from_path(path) {
        Some(SheetFormat::Workbook) => read_workbook_grid(path),
        Some(SheetFormat::Csv) => read_csv_grid(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_workbook_grid(path: &Path) -> Result<SheetGrid> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    // The range begins at the first non-empty cell, not at A1. Only the row
    // offset is kept: leading blank columns are dropped, so a sheet whose
    // column A is empty has its markers matched in column B.
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(SheetGrid::with_offset(rows, first_row))
}

fn read_csv_grid(path: &Path) -> Result<SheetGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(SheetGrid::new(rows))
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Converts a workbook cell to text.
///
/// Integral floats drop their fractional part (`7.0` becomes `7`).
pub(crate) fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_numeric(*value),
        Data::Bool(value) => value.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SheetFormat::from_path(Path::new("COVMIN_0042.XLSX")),
            Some(SheetFormat::Workbook)
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("sheet.csv")),
            Some(SheetFormat::Csv)
        );
        assert_eq!(SheetFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(SheetFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Float(7.0)), "7");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(12)), "12");
        assert_eq!(cell_to_string(&Data::String("  NB01 ".to_string())), "NB01");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_read_csv_grid_keeps_text() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "\u{feff}Run,COVMIN_0042\n,\nAlias,Barcode\n0042, NB01 \n").unwrap();
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.first_row(), 0);
        assert_eq!(grid.rows()[0], vec!["Run", "COVMIN_0042"]);
        assert_eq!(grid.rows()[1], vec!["", ""]);
        assert_eq!(grid.rows()[2], vec!["Alias", "Barcode"]);
        assert_eq!(grid.rows()[3], vec!["0042", "NB01"]);
    }

    #[test]
    fn test_read_grid_unsupported() {
        let file = NamedTempFile::new().unwrap();
        let result = read_grid(file.path());
        assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
    }
}
