//! Publisher that only reports what it would copy.

use std::path::Path;

use covmin_model::RemoteLocation;
use tracing::info;

use crate::error::Result;
use crate::{Publisher, ensure_local_file};

/// Logs each copy instead of performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPublisher;

impl Publisher for DryRunPublisher {
    fn publish(&self, local: &Path, remote: &RemoteLocation) -> Result<()> {
        ensure_local_file(local)?;
        info!(local = %local.display(), remote = %remote, "upload skipped (dry run)");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn uploads(&self) -> bool {
        false
    }
}
