//! Snapshot persistence for the library.
//!
//! The whole library (units, lessons and cards) is saved as one JSON
//! document after every successful mutation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use vocab_core::{Card, Unit};

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "library.json";

/// Current snapshot layout.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

/// Everything the backend persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub version: u32,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl LibrarySnapshot {
    pub fn new(units: Vec<Unit>, cards: Vec<Card>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            units,
            cards,
        }
    }
}

/// Where library snapshots are loaded from and saved to.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The last saved snapshot, or `None` if nothing was saved yet.
    async fn load(&self) -> Result<Option<LibrarySnapshot>, StorageError>;

    async fn save(&self, snapshot: &LibrarySnapshot) -> Result<(), StorageError>;
}

/// Snapshot kept as `library.json` in a data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SNAPSHOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Option<LibrarySnapshot>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let snapshot: LibrarySnapshot = serde_json::from_slice(&bytes)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }

        tracing::info!(
            path = %self.path.display(),
            units = snapshot.units.len(),
            cards = snapshot.cards.len(),
            "loaded library snapshot"
        );
        Ok(Some(snapshot))
    }

    /// Write to a temporary sibling, then rename over the old file.
    async fn save(&self, snapshot: &LibrarySnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| self.io_error(err))?;
        }

        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|err| self.io_error(err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| self.io_error(err))?;

        tracing::debug!(path = %self.path.display(), "saved library snapshot");
        Ok(())
    }
}

/// Snapshot held in memory. Used when no data directory is configured.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<LibrarySnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    pub fn with_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }

    /// The last saved snapshot.
    pub async fn snapshot(&self) -> Option<LibrarySnapshot> {
        self.snapshot.lock().await.clone()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<LibrarySnapshot>, StorageError> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, snapshot: &LibrarySnapshot) -> Result<(), StorageError> {
        *self.snapshot.lock().await = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vocab_core::{CardClass, Catalog, Language};

    fn sample_snapshot() -> LibrarySnapshot {
        let mut catalog = Catalog::new();
        let unit_id = catalog.add_unit("Unit 1").unwrap().id;
        let lesson_id = catalog.add_lesson(unit_id, "Lesson 1").unwrap().id;
        let card = Card::new(
            "table",
            "طاولة",
            CardClass::Noun,
            Language::French,
            unit_id,
            lesson_id,
        );
        LibrarySnapshot::new(catalog.units().to_vec(), vec![card])
    }

    #[tokio::test]
    async fn file_store_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_round_trips_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        let snapshot = sample_snapshot();

        store.save(&snapshot).await.unwrap();

        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());
        assert_eq!(store.load().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn file_store_rejects_newer_versions() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let mut snapshot = sample_snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        store.save(&snapshot).await.unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedVersion(v) if v == SNAPSHOT_VERSION + 1));
    }

    #[tokio::test]
    async fn file_store_reports_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path(), b"{ not json").unwrap();

        assert!(matches!(
            store.load().await.unwrap_err(),
            StorageError::Serialization(_)
        ));
    }

    #[tokio::test]
    async fn memory_store_keeps_last_save() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let snapshot = sample_snapshot();
        store.save(&snapshot).await.unwrap();

        assert_eq!(store.snapshot().await, Some(snapshot.clone()));
        assert_eq!(store.load().await.unwrap(), Some(snapshot));
    }
}
