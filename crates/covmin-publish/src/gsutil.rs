//! Publishing through the `gsutil` command line tool.

use std::path::Path;
use std::process::Command;

use covmin_model::RemoteLocation;
use tracing::{debug, info};

use crate::error::{PublishError, Result};
use crate::{Publisher, ensure_local_file};

/// Default copy program.
pub const DEFAULT_GSUTIL_PROGRAM: &str = "gsutil";

/// Runs `<program> [args..] cp <local> <gs://uri>` for each file.
#[derive(Debug, Clone)]
pub struct GsutilPublisher {
    program: String,
    leading_args: Vec<String>,
}

impl GsutilPublisher {
    /// Parses a command line such as `gsutil` or `gcloud storage`.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts
            .next()
            .unwrap_or_else(|| DEFAULT_GSUTIL_PROGRAM.to_string());
        Self {
            program,
            leading_args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn leading_args(&self) -> &[String] {
        &self.leading_args
    }
}

impl Default for GsutilPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_GSUTIL_PROGRAM)
    }
}

impl Publisher for GsutilPublisher {
    fn publish(&self, local: &Path, remote: &RemoteLocation) -> Result<()> {
        ensure_local_file(local)?;
        let uri = remote.uri();
        debug!(program = %self.program, local = %local.display(), remote = %uri, "running copy");
        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .arg("cp")
            .arg(local)
            .arg(&uri)
            .output()
            .map_err(|source| PublishError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(PublishError::CommandFailed {
                program: self.program.clone(),
                local: local.to_path_buf(),
                remote: uri,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        info!(local = %local.display(), remote = %uri, "uploaded");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gsutil"
    }
}
