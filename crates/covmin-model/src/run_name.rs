//! Run name resolution.
//!
//! A run name identifies one sequencing batch (`COVMIN_0042`). It is either
//! supplied explicitly or embedded in the sample sheet file name. The part
//! after the prefix is the run number, used to build the entity column.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Prefix used by the instrument for run names.
pub const DEFAULT_RUN_PREFIX: &str = "COVMIN";

/// How to treat input that does not match the run name pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunNameMode {
    /// Log a warning and use the input verbatim as both run name and run
    /// number. Separators are kept, so `RUN_42` yields `entity:sampleGRUN_42_id`.
    #[default]
    Lenient,
    /// Reject the input.
    Strict,
}

/// Options controlling run name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunNameOptions {
    /// Literal token that starts every run name.
    pub prefix: String,
    /// Behavior for names that do not match.
    pub mode: RunNameMode,
}

impl Default for RunNameOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_RUN_PREFIX.to_string(),
            mode: RunNameMode::default(),
        }
    }
}

/// A resolved run name and its run number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunName {
    name: String,
    number: String,
}

impl RunName {
    /// Full run name, e.g. `COVMIN_0042`.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Suffix after the prefix, e.g. `0042`.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for RunName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Extracts [`RunName`]s using a compiled `<PREFIX>_<suffix>` pattern.
#[derive(Debug, Clone)]
pub struct RunNameResolver {
    pattern: Regex,
    options: RunNameOptions,
}

impl RunNameResolver {
    /// Compiles the pattern for the configured prefix.
    pub fn new(options: RunNameOptions) -> Result<Self> {
        let source = format!("{}_([A-Za-z0-9]+)", regex::escape(&options.prefix));
        let pattern = Regex::new(&source).map_err(|source| ModelError::InvalidRunPattern {
            prefix: options.prefix.clone(),
            source,
        })?;
        Ok(Self { pattern, options })
    }

    pub fn options(&self) -> &RunNameOptions {
        &self.options
    }

    /// Resolves a run name from an arbitrary string.
    ///
    /// The first match of the pattern anywhere in `value` wins, so
    /// `sheet_COVMIN_0042_final` resolves to `COVMIN_0042`.
    pub fn resolve(&self, value: &str) -> Result<RunName> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyRunName);
        }
        if let Some(captures) = self.pattern.captures(trimmed)
            && let (Some(full), Some(number)) = (captures.get(0), captures.get(1))
        {
            return Ok(RunName {
                name: full.as_str().to_string(),
                number: number.as_str().to_string(),
            });
        }
        match self.options.mode {
            RunNameMode::Strict => Err(ModelError::InvalidRunName {
                value: trimmed.to_string(),
                prefix: self.options.prefix.clone(),
            }),
            RunNameMode::Lenient => {
                tracing::warn!(
                    run_name = %trimmed,
                    prefix = %self.options.prefix,
                    "run name does not follow the expected format; using it verbatim"
                );
                Ok(RunName {
                    name: trimmed.to_string(),
                    number: trimmed.to_string(),
                })
            }
        }
    }

    /// Resolves a run name from a sample sheet file name (`COVMIN_0042.xlsx`).
    pub fn resolve_from_path(&self, path: &Path) -> Result<RunName> {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        self.resolve(stem)
    }
}
