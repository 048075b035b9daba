//! Data model for converting nanopore sample sheets into Terra data tables.
//!
//! This crate holds the types shared by every pipeline stage:
//!
//! - **Run names**: [`RunName`] and the [`RunNameResolver`] that extracts them
//!   from file names or user input
//! - **Entity columns**: [`EntityColumn`], the `entity:sample<token>_id` header
//!   Terra uses to key rows
//! - **Records**: [`SampleRecord`] and the per-record [`DerivedFields`]
//! - **Schema**: [`PublishedColumn`], the fixed column order of every table
//! - **Storage**: [`BucketPath`] and [`RemoteLocation`] for `gs://` destinations

mod entity;
mod error;
mod record;
mod run_name;
mod schema;
mod storage;

pub use entity::{ENTITY_PREFIX, ENTITY_SUFFIX, EntityColumn, RUN_TOKEN_PREFIX};
pub use error::{ModelError, Result};
pub use record::{DerivedFields, PRIMER_SET_NOT_SPECIFIED, SampleRecord};
pub use run_name::{DEFAULT_RUN_PREFIX, RunName, RunNameMode, RunNameOptions, RunNameResolver};
pub use schema::{PublishedColumn, columns};
pub use storage::{BucketPath, GS_SCHEME, RemoteLocation};
