//! Row transformation for Terra data tables.
//!
//! Turns a parsed [`SampleSheet`](covmin_ingest::SampleSheet) into a
//! [`RunTable`]: control samples are renamed per run, a primer set default is
//! filled, storage paths and per-invocation constants are attached, and the
//! rows are laid out in the published column order.

mod control;
mod derive;
mod error;
mod options;
mod table;
mod transformer;

pub use control::{control_alias, is_control};
pub use derive::{FASTQ_PASS_DIR, TERRA_OUTPUTS_DIR, fastq_directory, output_directory};
pub use error::{Result, TransformError};
pub use options::{
    DEFAULT_CONTROL_TOKENS, DEFAULT_READ_TYPE, DEFAULT_TECH_PLATFORM, RunContext, TransformOptions,
};
pub use table::{RunRow, RunTable};
pub use transformer::transform_sheet;
