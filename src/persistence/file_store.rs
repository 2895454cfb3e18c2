//! JSON-file implementation of the record store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::Snapshot;
use crate::error::DirectoryError;

/// Durable snapshot storage backed by a single pretty-printed JSON file.
///
/// # Atomicity
///
/// `save` writes the serialized snapshot to a sibling temp file and renames
/// it over the target, so a crash mid-write never leaves a partially-written
/// snapshot behind. This protects a single in-process writer only: no
/// cross-process locking is provided, and concurrent writers from multiple
/// processes are a documented limitation.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store persisting to `path`. The file itself is only
    /// materialized on first [`FileStore::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current snapshot.
    ///
    /// On first use, when no snapshot file exists yet, writes and returns the
    /// empty snapshot `{stores: [], jewelers: [], reviews: []}`. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the file cannot be read or
    /// does not parse as a snapshot.
    pub async fn load(&self) -> Result<Snapshot, DirectoryError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                DirectoryError::Persistence(format!(
                    "corrupt snapshot {}: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty = Snapshot::default();
                self.save(&empty).await?;
                Ok(empty)
            }
            Err(e) => Err(DirectoryError::Persistence(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Persists the full snapshot via write-to-temp-then-rename.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if serialization, the temp
    /// write, or the rename fails.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), DirectoryError> {
        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| DirectoryError::Persistence(format!("serialize snapshot: {e}")))?;

        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| DirectoryError::Persistence(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            DirectoryError::Persistence(format!(
                "rename {} -> {}: {e}",
                tmp.display(),
                self.path.display()
            ))
        })?;
        Ok(())
    }

    /// Sibling temp path in the same directory, so the rename stays on one
    /// filesystem.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
