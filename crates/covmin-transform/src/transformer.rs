//! Sample sheet to run table transformation.

use std::collections::BTreeSet;

use covmin_ingest::SampleSheet;
use covmin_model::{DerivedFields, PRIMER_SET_NOT_SPECIFIED};
use tracing::{debug, warn};

use crate::control::control_alias;
use crate::derive::{fastq_directory, output_directory};
use crate::options::{RunContext, TransformOptions};
use crate::table::{RunRow, RunTable};

/// Transforms every record of `sheet` for the run described by `context`.
///
/// Steps, per record: control aliases get the run name appended, a missing
/// primer set column becomes `not specified`, then `fastq_dir` and the
/// per-run constants are attached.
pub fn transform_sheet(sheet: SampleSheet, context: &RunContext, options: &TransformOptions) -> RunTable {
    let run_name = context.run.as_str();
    let has_primer_set = sheet.has_primer_set();
    let output_dir = output_directory(
        context.output_prefix.as_deref(),
        &context.bucket_name,
        run_name,
    );
    let download_date = context.download_date.format("%Y-%m-%d").to_string();

    let mut controls_renamed = 0usize;
    let mut seen = BTreeSet::new();
    let mut rows = Vec::with_capacity(sheet.records.len());
    for mut record in sheet.records {
        if let Some(renamed) = control_alias(&record.alias, run_name, &options.control_tokens) {
            debug!(run_name = %run_name, "renamed control sample");
            record.alias = renamed;
            controls_renamed += 1;
        }
        if !has_primer_set {
            record.primer_set = Some(PRIMER_SET_NOT_SPECIFIED.to_string());
        }
        if !seen.insert(record.alias.clone()) {
            warn!(
                run_name = %run_name,
                barcode = %record.barcode,
                "duplicate sample identifier in sample sheet"
            );
        }
        let derived = DerivedFields {
            fastq_directory: fastq_directory(&context.bucket_name, run_name, &record.barcode),
            output_directory: output_dir.clone(),
            seq_run: run_name.to_string(),
            download_date: download_date.clone(),
            tech_platform: options.tech_platform.clone(),
            read_type: options.read_type.clone(),
        };
        rows.push(RunRow { record, derived });
    }

    RunTable::new(
        context.run.clone(),
        context.entity.clone(),
        rows,
        controls_renamed,
    )
}
