//! Sample sheet processing pipeline with explicit stages.
//!
//! Each sample sheet goes through these stages in order:
//! 1. **Resolve**: Derive the run name from `--seq_run` or the file name
//! 2. **Load**: Locate the header row and read sample records
//! 3. **Transform**: Rename controls, fill defaults, derive columns
//! 4. **Write**: Serialize the run table as TSV
//! 5. **Publish**: Copy the table and the source sheet to the bucket
//!
//! Several runs are then optionally combined by [`concatenate`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use covmin_ingest::{SampleSheet, load_sample_sheet};
use covmin_model::{BucketPath, EntityColumn, RemoteLocation, RunName, RunNameResolver};
use covmin_output::{concatenate_tables, write_concatenated, write_run_table};
use covmin_publish::Publisher;
use covmin_transform::{RunContext, RunTable, transform_sheet};
use tracing::{info, info_span, trace};

use crate::config::PipelineConfig;
use crate::logging::redact_value;
use crate::types::{ConcatenatedResult, RunResult};

/// Settings shared by every sample sheet of an invocation.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub config: PipelineConfig,
    pub bucket: BucketPath,
    pub output_dir: PathBuf,
    /// `--terra_output_dir` prefix.
    pub output_prefix: Option<String>,
    pub download_date: NaiveDate,
}

// ============================================================================
// Stage 1: Resolve
// ============================================================================

/// Run name from an explicit value, falling back to the sheet's file name.
pub fn resolve_run(
    resolver: &RunNameResolver,
    explicit: Option<&str>,
    sample_sheet: &Path,
) -> Result<RunName> {
    let run = match explicit {
        Some(value) => resolver.resolve(value),
        None => resolver.resolve_from_path(sample_sheet),
    }
    .with_context(|| format!("resolve run name for {}", sample_sheet.display()))?;
    info!(run_name = %run, run_number = %run.number(), "run name resolved");
    Ok(run)
}

// ============================================================================
// Stage 2: Load
// ============================================================================

pub fn load(run: &RunName, sample_sheet: &Path, config: &PipelineConfig) -> Result<SampleSheet> {
    let start = Instant::now();
    let sheet = load_sample_sheet(sample_sheet, &config.sheet)
        .with_context(|| format!("load sample sheet {}", sample_sheet.display()))?;
    info!(
        run_name = %run,
        path = %sample_sheet.display(),
        header_row = sheet.header_row,
        rows = sheet.records.len(),
        dropped = sheet.dropped_rows,
        duration_ms = start.elapsed().as_millis(),
        "sample sheet loaded"
    );
    Ok(sheet)
}

// ============================================================================
// Stage 3: Transform
// ============================================================================

pub fn transform(run: RunName, sheet: SampleSheet, settings: &PipelineSettings) -> RunTable {
    let context = RunContext::new(run, settings.bucket.bucket(), settings.download_date)
        .with_output_prefix(settings.output_prefix.clone());
    let table = transform_sheet(sheet, &context, &settings.config.transform);
    for row in table.rows() {
        trace!(
            run_name = %table.run(),
            sample = %redact_value(&row.record.alias),
            barcode = %row.record.barcode,
            "sample row"
        );
    }
    info!(
        run_name = %table.run(),
        entity = %table.entity(),
        rows = table.len(),
        controls = table.controls_renamed(),
        "sample sheet transformed"
    );
    table
}

// ============================================================================
// Stage 4: Write
// ============================================================================

pub fn write(table: &RunTable, output_dir: &Path) -> Result<PathBuf> {
    write_run_table(table, output_dir)
        .with_context(|| format!("write data table for {}", table.run()))
}

// ============================================================================
// Stage 5: Publish
// ============================================================================

/// Copies the run table and its sample sheet into `<bucket path>/<run>/`.
///
/// Returns the locations written, empty when the publisher does not upload.
pub fn publish_run(
    publisher: &dyn Publisher,
    bucket: &BucketPath,
    run: &RunName,
    files: &[&Path],
) -> Result<Vec<RemoteLocation>> {
    let mut published = Vec::with_capacity(files.len());
    for local in files {
        let file_name = file_name(local)?;
        let remote = bucket.run_object(run, file_name);
        publisher
            .publish(local, &remote)
            .with_context(|| format!("publish {} to {remote}", local.display()))?;
        info!(
            run_name = %run,
            publisher = publisher.name(),
            path = %local.display(),
            remote = %remote,
            "file published"
        );
        if publisher.uploads() {
            published.push(remote);
        }
    }
    Ok(published)
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("file name of {}", path.display()))
}

/// Runs every stage for one sample sheet.
pub fn process_sheet(
    resolver: &RunNameResolver,
    explicit_run: Option<&str>,
    sample_sheet: &Path,
    settings: &PipelineSettings,
    publisher: &dyn Publisher,
) -> Result<(RunTable, RunResult)> {
    let run = resolve_run(resolver, explicit_run, sample_sheet)?;
    let span = info_span!("sheet", run_name = %run);
    let _guard = span.enter();

    let sheet = load(&run, sample_sheet, &settings.config)?;
    let dropped_rows = sheet.dropped_rows;
    let table = transform(run, sheet, settings);
    let table_path = write(&table, &settings.output_dir)?;
    let published = publish_run(
        publisher,
        &settings.bucket,
        table.run(),
        &[table_path.as_path(), sample_sheet],
    )?;

    let result = RunResult {
        run_name: table.run().to_string(),
        entity_header: table.entity().header(),
        sample_sheet: sample_sheet.to_path_buf(),
        table_path,
        samples: table.len(),
        dropped_rows,
        controls_renamed: table.controls_renamed(),
        published: published.iter().map(RemoteLocation::uri).collect(),
    };
    Ok((table, result))
}

// ============================================================================
// Concatenation
// ============================================================================

/// Shared entity column: the override when given, else every run token in order.
pub fn shared_entity(
    tables: &[RunTable],
    entity_override: Option<&str>,
    separator: &str,
) -> Result<EntityColumn> {
    match entity_override {
        Some(raw) => EntityColumn::from_override(raw, separator)
            .with_context(|| format!("entity column name '{raw}'")),
        None => EntityColumn::combined(tables.iter().map(RunTable::entity))
            .context("combine entity columns"),
    }
}

/// Writes and publishes the concatenated table of all runs.
pub fn concatenate(
    tables: &[RunTable],
    shared: &EntityColumn,
    settings: &PipelineSettings,
    publisher: &dyn Publisher,
) -> Result<ConcatenatedResult> {
    let span = info_span!("concatenate", entity = %shared);
    let _guard = span.enter();

    let mut combined = concatenate_tables(tables, shared).context("concatenate data tables")?;
    let path = write_concatenated(&mut combined, &settings.output_dir)
        .context("write concatenated data table")?;
    let remote = settings.bucket.root_object(file_name(&path)?);
    publisher
        .publish(&path, &remote)
        .with_context(|| format!("publish {} to {remote}", path.display()))?;
    info!(
        publisher = publisher.name(),
        path = %path.display(),
        remote = %remote,
        runs = tables.len(),
        rows = combined.len(),
        "concatenated table published"
    );
    Ok(ConcatenatedResult {
        entity_header: shared.header(),
        path,
        rows: combined.len(),
        published: publisher.uploads().then(|| remote.uri()),
    })
}
