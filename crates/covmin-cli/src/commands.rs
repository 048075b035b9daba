use std::env;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use covmin_ingest::resolve_inputs;
use covmin_model::{BucketPath, RunNameResolver};
use covmin_publish::{DryRunPublisher, GsutilPublisher, MirrorPublisher, Publisher};
use tracing::{info, info_span, warn};

use crate::cli::ConvertArgs;
use crate::config::PipelineConfig;
use crate::pipeline::{PipelineSettings, concatenate, process_sheet, shared_entity};
use crate::types::ConvertResult;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let start = Instant::now();
    let config = PipelineConfig::from_args(args)?;
    let bucket: BucketPath = args
        .bucket_path
        .parse()
        .with_context(|| format!("bucket path '{}'", args.bucket_path))?;
    let resolver =
        RunNameResolver::new(config.run_name.clone()).context("build run name resolver")?;
    let publisher = build_publisher(args);

    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("resolve current directory")?,
    };
    let inputs = resolve_inputs(&args.input)
        .with_context(|| format!("resolve input {}", args.input.display()))?;
    if args.seq_run.is_some() && inputs.len() > 1 {
        bail!(
            "--seq_run names a single run but {} sample sheets were found in {}",
            inputs.len(),
            args.input.display()
        );
    }

    let convert_span = info_span!("convert", input = %args.input.display(), bucket = %bucket);
    let _convert_guard = convert_span.enter();
    info!(
        sheets = inputs.len(),
        output_dir = %output_dir.display(),
        publisher = publisher.name(),
        "starting conversion"
    );

    let settings = PipelineSettings {
        config,
        bucket,
        output_dir: output_dir.clone(),
        output_prefix: args.terra_output_dir.clone(),
        download_date: args
            .download_date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    let mut tables = Vec::with_capacity(inputs.len());
    let mut runs = Vec::with_capacity(inputs.len());
    for sample_sheet in &inputs {
        let (table, result) = process_sheet(
            &resolver,
            args.seq_run.as_deref(),
            sample_sheet,
            &settings,
            publisher.as_ref(),
        )?;
        tables.push(table);
        runs.push(result);
    }

    let concatenated = if tables.len() > 1 && !args.no_concat {
        let shared = shared_entity(
            &tables,
            args.entity_col_name.as_deref(),
            &settings.config.entity_separator,
        )?;
        Some(concatenate(&tables, &shared, &settings, publisher.as_ref())?)
    } else {
        if let Some(name) = &args.entity_col_name {
            warn!(
                entity_col_name = %name,
                runs = tables.len(),
                "entity column name ignored without a concatenated table"
            );
        }
        None
    };

    info!(
        runs = runs.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(ConvertResult {
        output_dir,
        publisher: publisher.name(),
        runs,
        concatenated,
    })
}

fn build_publisher(args: &ConvertArgs) -> Box<dyn Publisher> {
    if args.no_upload {
        Box::new(DryRunPublisher)
    } else if let Some(root) = &args.mirror_dir {
        Box::new(MirrorPublisher::new(root.clone()))
    } else {
        Box::new(GsutilPublisher::new(&args.gsutil))
    }
}
