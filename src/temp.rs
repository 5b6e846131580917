//! Scoped temporary artifacts.
//!
//! Every request-scoped byte buffer that must hit the filesystem (uploaded
//! audio, converted waveforms, synthesized speech) lives in a [`TempArtifact`]:
//! acquired on create, deleted on drop, on every exit path. No existence
//! checks at the end of a flow.

use crate::defaults::TEMP_PREFIX;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A filesystem-backed byte buffer with a process-unique path.
///
/// Exclusively owned until dropped; the backing file is removed when the
/// artifact goes out of scope, regardless of which branch executed.
pub struct TempArtifact {
    file: NamedTempFile,
}

impl TempArtifact {
    /// Create an empty artifact with the given filename suffix (e.g. ".wav").
    pub fn create(suffix: &str) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(suffix)
            .tempfile()?;
        Ok(Self { file })
    }

    /// Create an artifact holding the given bytes.
    pub fn from_bytes(bytes: &[u8], suffix: &str) -> Result<Self> {
        let mut artifact = Self::create(suffix)?;
        artifact.file.write_all(bytes)?;
        artifact.file.flush()?;
        Ok(artifact)
    }

    /// The unique path of the backing file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the current contents of the backing file.
    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.path())?)
    }
}

impl std::fmt::Debug for TempArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempArtifact")
            .field("path", &self.path())
            .finish()
    }
}

/// Snapshot of this crate's files currently in the platform temp directory.
///
/// Lets tests assert that a flow released everything it created.
pub fn temp_artifact_paths() -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(std::env::temp_dir()) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(TEMP_PREFIX))
        })
        .collect()
}
