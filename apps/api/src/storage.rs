//! Transient upload storage.
//!
//! Every upload is written under a unique key inside the upload directory and
//! handed back as a [`StagedUpload`] guard. Dropping the guard deletes the file,
//! so cleanup happens on every exit path of the request.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use tempfile::TempPath;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TransientStorage {
    dir: PathBuf,
}

impl TransientStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create upload directory '{}'", self.dir.display())
        })?;
        Ok(())
    }

    /// Writes `bytes` to a fresh file named `upload-<request_id>-<random>[.<extension>]`.
    ///
    /// The caller's filename never reaches the filesystem, so concurrent uploads
    /// sharing a name cannot clobber each other.
    pub async fn stage(
        &self,
        request_id: Uuid,
        extension: Option<&str>,
        bytes: Bytes,
    ) -> Result<StagedUpload> {
        let dir = self.dir.clone();
        let prefix = format!("upload-{request_id}-");
        let suffix = extension.map(|ext| format!(".{ext}")).unwrap_or_default();

        tokio::task::spawn_blocking(move || -> Result<StagedUpload> {
            let mut file = tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(&suffix)
                .tempfile_in(&dir)
                .with_context(|| format!("Failed to create upload in '{}'", dir.display()))?;
            file.write_all(&bytes)
                .context("Failed to write upload to transient storage")?;
            file.flush()?;

            let path = file.into_temp_path();
            debug!("Staged {} bytes at {}", bytes.len(), path.display());
            Ok(StagedUpload { path })
        })
        .await
        .context("Upload staging task failed")?
    }
}

/// A request-scoped file in transient storage. Removed when dropped.
#[derive(Debug)]
pub struct StagedUpload {
    path: TempPath,
}

impl StagedUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file now, logging instead of failing if removal goes wrong.
    pub fn discard(self) {
        let location = self.path.display().to_string();
        match self.path.close() {
            Ok(()) => debug!("Removed transient upload {location}"),
            Err(e) => warn!("Failed to remove transient upload {location}: {e}"),
        }
    }
}
