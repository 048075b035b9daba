//! Sample sheet parsing options.

use std::collections::BTreeMap;

use covmin_model::columns;
use serde::{Deserialize, Serialize};

/// Rows scanned for a header marker before giving up.
pub const DEFAULT_MAX_SCAN_ROWS: usize = 200;

/// First-cell values that mark the sample table header row.
pub fn default_header_markers() -> Vec<String> {
    ["Alias", "Sample_ID", "Sample ID", "sample_id"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Historical column names mapped to their canonical name.
pub fn default_column_aliases() -> BTreeMap<String, String> {
    [
        ("Sample_ID", columns::ALIAS),
        ("Sample ID", columns::ALIAS),
        ("sample_id", columns::ALIAS),
        ("Barcode", columns::BARCODE),
        ("barcode_id", columns::BARCODE),
        ("Well_Location", columns::PLATE_SAMPLE_WELL),
        ("Plate_Well", columns::PLATE_SAMPLE_WELL),
        ("plate_well", columns::PLATE_SAMPLE_WELL),
        ("Other_Name", columns::PLATE_NAME),
        ("Plate_Name", columns::PLATE_NAME),
        ("Primer_Set", columns::PRIMER_SET),
        ("primer set", columns::PRIMER_SET),
    ]
    .into_iter()
    .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
    .collect()
}

/// Options controlling how a sample sheet is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    /// Values whose presence in a row's first cell marks the header row.
    pub header_markers: Vec<String>,
    /// Column renames applied once after the header row is read.
    pub column_aliases: BTreeMap<String, String>,
    /// How many leading rows to scan for a marker.
    pub max_scan_rows: usize,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            header_markers: default_header_markers(),
            column_aliases: default_column_aliases(),
            max_scan_rows: DEFAULT_MAX_SCAN_ROWS,
        }
    }
}
