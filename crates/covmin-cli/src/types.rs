use std::path::PathBuf;

/// Outcome of processing one sample sheet.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub run_name: String,
    pub entity_header: String,
    pub sample_sheet: PathBuf,
    pub table_path: PathBuf,
    pub samples: usize,
    pub dropped_rows: usize,
    pub controls_renamed: usize,
    /// Remote URIs the table and sheet were published to.
    pub published: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ConcatenatedResult {
    pub entity_header: String,
    pub path: PathBuf,
    pub rows: usize,
    pub published: Option<String>,
}

/// Outcome of one invocation.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub output_dir: PathBuf,
    pub publisher: &'static str,
    pub runs: Vec<RunResult>,
    pub concatenated: Option<ConcatenatedResult>,
}
