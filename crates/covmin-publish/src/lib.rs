//! Publishing of local files to object storage.
//!
//! The pipeline only needs "copy this file to that `gs://` location, fail
//! loudly otherwise". [`Publisher`] captures that seam; implementations shell
//! out to `gsutil`, mirror into a local directory, or only log.

mod dry_run;
mod error;
mod gsutil;
mod mirror;

use std::path::Path;

use covmin_model::RemoteLocation;

pub use dry_run::DryRunPublisher;
pub use error::{PublishError, Result};
pub use gsutil::{DEFAULT_GSUTIL_PROGRAM, GsutilPublisher};
pub use mirror::MirrorPublisher;

/// Copies a local file to a remote location.
pub trait Publisher {
    /// Copies `local` so it becomes retrievable at `remote`.
    fn publish(&self, local: &Path, remote: &RemoteLocation) -> Result<()>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether a successful `publish` leaves the file at its remote location.
    fn uploads(&self) -> bool {
        true
    }
}

pub(crate) fn ensure_local_file(local: &Path) -> Result<()> {
    if local.is_file() {
        Ok(())
    } else {
        Err(PublishError::MissingLocal {
            path: local.to_path_buf(),
        })
    }
}
