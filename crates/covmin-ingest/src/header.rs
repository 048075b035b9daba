//! Header row detection and column aliasing.

use std::collections::BTreeMap;

use crate::grid::SheetGrid;

/// Finds the sample table header row within the first `max_scan_rows` rows.
///
/// A row is the header when its first cell, trimmed, equals one of `markers`.
/// The first such row wins. Returns the grid row index.
pub fn find_header_row(grid: &SheetGrid, markers: &[String], max_scan_rows: usize) -> Option<usize> {
    grid.rows()
        .iter()
        .take(max_scan_rows)
        .position(|row| {
            row.first().is_some_and(|cell| {
                let cell = cell.trim();
                markers.iter().any(|marker| marker == cell)
            })
        })
}

/// Maps a raw header cell to its canonical column name.
pub fn canonical_column(raw: &str, aliases: &BTreeMap<String, String>) -> String {
    let trimmed = raw.trim();
    aliases
        .get(trimmed)
        .cloned()
        .unwrap_or_else(|| trimmed.to_string())
}
