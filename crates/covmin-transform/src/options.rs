//! Transformation options and per-run context.

use chrono::NaiveDate;
use covmin_model::{EntityColumn, RunName};
use serde::{Deserialize, Serialize};

/// Substrings that mark positive and negative control samples.
pub const DEFAULT_CONTROL_TOKENS: [&str; 2] = ["POS", "NC"];

/// Sequencing technology recorded in every row.
pub const DEFAULT_TECH_PLATFORM: &str = "Oxford Nanopore";

/// Read layout recorded in every row.
pub const DEFAULT_READ_TYPE: &str = "single";

/// Options shared by every run of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Case-sensitive substrings identifying control samples.
    pub control_tokens: Vec<String>,
    pub tech_platform: String,
    pub read_type: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            control_tokens: DEFAULT_CONTROL_TOKENS.iter().map(|t| (*t).to_string()).collect(),
            tech_platform: DEFAULT_TECH_PLATFORM.to_string(),
            read_type: DEFAULT_READ_TYPE.to_string(),
        }
    }
}

/// What the transformer needs to know about one run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run: RunName,
    pub entity: EntityColumn,
    /// Bucket holding the run's `fastq_pass` directory.
    pub bucket_name: String,
    /// Prefix for workflow outputs; defaults to `gs://<bucket_name>`.
    pub output_prefix: Option<String>,
    pub download_date: NaiveDate,
}

impl RunContext {
    /// Context with the run's own entity column and no output prefix.
    pub fn new(run: RunName, bucket_name: impl Into<String>, download_date: NaiveDate) -> Self {
        let entity = EntityColumn::for_run(&run);
        Self {
            run,
            entity,
            bucket_name: bucket_name.into(),
            output_prefix: None,
            download_date,
        }
    }

    #[must_use]
    pub fn with_output_prefix(mut self, prefix: Option<String>) -> Self {
        self.output_prefix = prefix;
        self
    }
}
