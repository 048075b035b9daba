//! Publishing into a local directory laid out like the bucket.

use std::fs;
use std::path::{Path, PathBuf};

use covmin_model::RemoteLocation;
use tracing::info;

use crate::error::{PublishError, Result};
use crate::{Publisher, ensure_local_file};

/// Copies files to `<root>/<bucket>/<object path>`.
#[derive(Debug, Clone)]
pub struct MirrorPublisher {
    root: PathBuf,
}

impl MirrorPublisher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Local path standing in for `remote`.
    pub fn destination(&self, remote: &RemoteLocation) -> PathBuf {
        let mut path = self.root.join(remote.bucket());
        for component in remote.object().split('/').filter(|c| !c.is_empty()) {
            path.push(component);
        }
        path
    }
}

impl Publisher for MirrorPublisher {
    fn publish(&self, local: &Path, remote: &RemoteLocation) -> Result<()> {
        ensure_local_file(local)?;
        let destination = self.destination(remote);
        let copy_error = |source| PublishError::Copy {
            local: local.to_path_buf(),
            destination: destination.clone(),
            source,
        };
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(copy_error)?;
        }
        fs::copy(local, &destination).map_err(copy_error)?;
        info!(
            local = %local.display(),
            remote = %remote,
            destination = %destination.display(),
            "mirrored"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mirror"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_destination_layout() {
        let publisher = MirrorPublisher::new("/mirror");
        let remote = RemoteLocation::new("covid_terra", "runs/COVMIN_0042/sheet.xlsx");
        assert_eq!(
            publisher.destination(&remote),
            PathBuf::from("/mirror/covid_terra/runs/COVMIN_0042/sheet.xlsx")
        );
    }

    #[test]
    fn test_publish_copies_file() {
        let source_dir = TempDir::new().unwrap();
        let mirror_dir = TempDir::new().unwrap();
        let local = source_dir.path().join("table.tsv");
        fs::write(&local, "a\tb\n").unwrap();

        let publisher = MirrorPublisher::new(mirror_dir.path());
        let remote = RemoteLocation::new("covid_terra", "COVMIN_0042/table.tsv");
        publisher.publish(&local, &remote).unwrap();

        let copied = mirror_dir.path().join("covid_terra/COVMIN_0042/table.tsv");
        assert_eq!(fs::read_to_string(copied).unwrap(), "a\tb\n");
    }
}
