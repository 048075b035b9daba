//! Google Cloud Storage locations.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::run_name::RunName;

/// URI scheme of Google Cloud Storage objects.
pub const GS_SCHEME: &str = "gs://";

/// A bucket plus an optional path inside it, parsed from `--bucket_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketPath {
    bucket: String,
    prefix: Option<String>,
}

impl BucketPath {
    /// Bucket name, the first path component.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Path inside the bucket without surrounding slashes.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// `<bucket path>/<run>/<file name>`.
    pub fn run_object(&self, run: &RunName, file_name: &str) -> RemoteLocation {
        self.object(&format!("{run}/{file_name}"))
    }

    /// `<bucket path>/<file name>`.
    pub fn root_object(&self, file_name: &str) -> RemoteLocation {
        self.object(file_name)
    }

    fn object(&self, relative: &str) -> RemoteLocation {
        let object = match &self.prefix {
            Some(prefix) => format!("{prefix}/{relative}"),
            None => relative.to_string(),
        };
        RemoteLocation {
            bucket: self.bucket.clone(),
            object,
        }
    }
}

impl FromStr for BucketPath {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let stripped = trimmed.strip_prefix(GS_SCHEME).unwrap_or(trimmed);
        let mut components = stripped.split('/').filter(|part| !part.is_empty());
        let Some(bucket) = components.next() else {
            return Err(ModelError::InvalidBucketPath {
                value: value.to_string(),
            });
        };
        let rest: Vec<&str> = components.collect();
        let prefix = if rest.is_empty() {
            None
        } else {
            Some(rest.join("/"))
        };
        Ok(Self {
            bucket: bucket.to_string(),
            prefix,
        })
    }
}

impl fmt::Display for BucketPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{GS_SCHEME}{}/{prefix}", self.bucket),
            None => write!(f, "{GS_SCHEME}{}", self.bucket),
        }
    }
}

/// A single object in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    bucket: String,
    object: String,
}

impl RemoteLocation {
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object name, `/`-separated.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// `gs://<bucket>/<object>`.
    pub fn uri(&self) -> String {
        format!("{GS_SCHEME}{}/{}", self.bucket, self.object)
    }
}

impl fmt::Display for RemoteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GS_SCHEME}{}/{}", self.bucket, self.object)
    }
}
