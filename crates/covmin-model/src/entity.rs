//! Entity column naming.
//!
//! Terra keys data table rows by a first column named
//! `entity:<type>_id`. Tables produced here use the entity type
//! `sample<token>`, where the token is `G<run number>` for a single run or a
//! shared token when several runs are concatenated.

use std::fmt;

use crate::error::{ModelError, Result};
use crate::run_name::RunName;

/// Leading part of every entity header.
pub const ENTITY_PREFIX: &str = "entity:sample";

/// Trailing part of every entity header.
pub const ENTITY_SUFFIX: &str = "_id";

/// Prepended to the run number to build a run token.
pub const RUN_TOKEN_PREFIX: &str = "G";

/// The identifier column of an output table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityColumn {
    token: String,
}

impl EntityColumn {
    /// Entity column for a single run: `entity:sampleG<run number>_id`.
    pub fn for_run(run: &RunName) -> Self {
        Self {
            token: format!("{RUN_TOKEN_PREFIX}{}", run.number()),
        }
    }

    /// Entity column from a user-supplied token.
    ///
    /// A full header (`entity:sampleX_id`) is reduced to its token, then every
    /// occurrence of `separator` is removed.
    pub fn from_override(raw: &str, separator: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let token = trimmed
            .strip_prefix(ENTITY_PREFIX)
            .and_then(|rest| rest.strip_suffix(ENTITY_SUFFIX))
            .unwrap_or(trimmed);
        let token = if separator.is_empty() {
            token.to_string()
        } else {
            token.replace(separator, "")
        };
        if token.is_empty() {
            return Err(ModelError::EmptyEntityToken {
                raw: raw.to_string(),
            });
        }
        Ok(Self { token })
    }

    /// Shared column for several runs: the tokens joined in order.
    pub fn combined<'a, I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a EntityColumn>,
    {
        let token: String = columns
            .into_iter()
            .map(|column| column.token.as_str())
            .collect();
        if token.is_empty() {
            return Err(ModelError::NoEntityColumns);
        }
        Ok(Self { token })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Full column header.
    pub fn header(&self) -> String {
        format!("{ENTITY_PREFIX}{}{ENTITY_SUFFIX}", self.token)
    }
}

impl fmt::Display for EntityColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ENTITY_PREFIX}{}{ENTITY_SUFFIX}", self.token)
    }
}
