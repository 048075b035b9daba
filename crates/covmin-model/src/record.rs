//! Sample sheet records and the fields derived from them.

/// Placeholder used when the sample sheet has no primer set column.
pub const PRIMER_SET_NOT_SPECIFIED: &str = "not specified";

/// One row of a sample sheet.
///
/// Optional fields are `None` when the column is absent from the sheet and
/// `Some` (possibly empty) when the column exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleRecord {
    /// Sample identifier. Never empty.
    pub alias: String,
    pub barcode: String,
    pub plate_name: Option<String>,
    pub plate_well: Option<String>,
    pub primer_set: Option<String>,
}

impl SampleRecord {
    pub fn new(alias: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            barcode: barcode.into(),
            ..Self::default()
        }
    }
}

/// Values computed for each record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    /// `gs://<bucket>/<run>/fastq_pass/<barcode>`.
    pub fastq_directory: String,
    /// Workflow output location for the run.
    pub output_directory: String,
    pub seq_run: String,
    /// `YYYY-MM-DD`.
    pub download_date: String,
    pub tech_platform: String,
    pub read_type: String,
}
