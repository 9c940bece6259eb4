//! Dump file on disk.

use std::path::{Path, PathBuf};

use crate::{decode_lossy, DumpSource, SourceError};

/// A dump already written to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDump {
    path: PathBuf,
}

impl FileDump {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DumpSource for FileDump {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn read(&self) -> Result<String, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "read dump file");
        Ok(decode_lossy(bytes, &self.describe()))
    }
}
