//! Storage paths derived per record and per run.

use covmin_model::GS_SCHEME;

/// Directory under a run holding basecalled reads.
pub const FASTQ_PASS_DIR: &str = "fastq_pass";

/// Directory under a run receiving workflow outputs.
pub const TERRA_OUTPUTS_DIR: &str = "terra_outputs";

/// `gs://<bucket>/<run>/fastq_pass/<barcode>`.
pub fn fastq_directory(bucket_name: &str, run_name: &str, barcode: &str) -> String {
    format!("{GS_SCHEME}{bucket_name}/{run_name}/{FASTQ_PASS_DIR}/{barcode}")
}

/// `<prefix>/<run>/terra_outputs/`, with `prefix` defaulting to `gs://<bucket>`.
pub fn output_directory(prefix: Option<&str>, bucket_name: &str, run_name: &str) -> String {
    let prefix = match prefix {
        Some(prefix) => prefix.trim_end_matches('/').to_string(),
        None => format!("{GS_SCHEME}{bucket_name}"),
    };
    format!("{prefix}/{run_name}/{TERRA_OUTPUTS_DIR}/")
}
