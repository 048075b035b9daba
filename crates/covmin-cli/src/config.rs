//! Pipeline configuration loaded from an optional JSON file.
//!
//! ```json
//! {
//!   "sheet": { "max_scan_rows": 50 },
//!   "run_name": { "prefix": "COVMIN", "mode": "strict" },
//!   "transform": { "control_tokens": ["POS", "NC", "NTC"] },
//!   "entity_separator": "_"
//! }
//! ```
//!
//! Missing fields keep their defaults; CLI flags are applied on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use covmin_ingest::SheetOptions;
use covmin_model::{RunNameMode, RunNameOptions};
use covmin_transform::TransformOptions;
use serde::{Deserialize, Serialize};

use crate::cli::ConvertArgs;

/// Separator stripped from entity column overrides.
pub const DEFAULT_ENTITY_SEPARATOR: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub sheet: SheetOptions,
    pub run_name: RunNameOptions,
    pub transform: TransformOptions,
    pub entity_separator: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sheet: SheetOptions::default(),
            run_name: RunNameOptions::default(),
            transform: TransformOptions::default(),
            entity_separator: DEFAULT_ENTITY_SEPARATOR.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parse config {}", path.display()))
    }

    /// File configuration (or defaults) with CLI overrides applied.
    pub fn from_args(args: &ConvertArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if args.strict_run_name {
            config.run_name.mode = RunNameMode::Strict;
        }
        Ok(config)
    }
}
