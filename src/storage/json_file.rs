//! Flat-file record store
//!
//! The whole document is loaded for every call and written back after
//! every mutation. Mutations inside one process are serialized with a
//! mutex; nothing guards against other processes touching the file.
//! Writes go to a sibling temp file that is renamed over the data file,
//! so readers never observe a partial document.

use super::{Database, RecordStore};
use crate::core::error::StorageError;
use crate::entities::ResourceKind;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Record store backed by a single JSON file
#[derive(Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty document if the file is missing
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        };

        if !tokio::fs::try_exists(store.path()).await.map_err(|e| store.io_error(e))? {
            if let Some(parent) = store.path().parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| store.io_error(e))?;
            }
            store.save(&Database::default()).await?;
            tracing::info!(path = %store.path().display(), "Created empty data file");
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Read and parse the whole document
    pub async fn load(&self) -> Result<Database, StorageError> {
        let bytes = tokio::fs::read(self.path()).await.map_err(|e| self.io_error(e))?;

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn save(&self, db: &Database) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(db).map_err(StorageError::Serialize)?;
        let staging = self.staging_path();

        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&staging, self.path())
            .await
            .map_err(|e| self.io_error(e))
    }

    /// Load, apply `mutate`, and write back when it reports a change
    async fn mutate<R>(
        &self,
        mutate: impl FnOnce(&mut Database) -> (R, bool) + Send,
    ) -> Result<R, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut db = self.load().await?;
        let (result, changed) = mutate(&mut db);
        if changed {
            self.save(&db).await?;
        }

        Ok(result)
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Value>, StorageError> {
        let mut db = self.load().await?;
        Ok(std::mem::take(db.collection_mut(kind)))
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>, StorageError> {
        let db = self.load().await?;
        Ok(db.find(kind, id).cloned())
    }

    async fn create(&self, kind: ResourceKind, record: Value) -> Result<Value, StorageError> {
        let stored = record.clone();
        self.mutate(move |db| {
            db.collection_mut(kind).push(stored);
            ((), true)
        })
        .await?;

        tracing::debug!(resource = %kind, "Appended record to data file");
        Ok(record)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        record: Value,
    ) -> Result<Option<Value>, StorageError> {
        self.mutate(|db| {
            let replaced = db.replace(kind, id, record);
            let changed = replaced.is_some();
            (replaced, changed)
        })
        .await
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<bool, StorageError> {
        self.mutate(|db| {
            let removed = db.remove(kind, id);
            (removed, removed)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("db.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(store.load().await.unwrap(), Database::default());
    }

    #[tokio::test]
    async fn test_mutations_rewrite_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = JsonFileStore::open(&path).await.unwrap();

        store
            .create(ResourceKind::Categories, json!({"id": "c1", "name": "Toys"}))
            .await
            .unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["categories"][0]["name"], "Toys");

        // A second handle sees the same data since every read hits the file
        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.list(ResourceKind::Categories).await.unwrap().len(), 1);

        assert!(store.delete(ResourceKind::Categories, "c1").await.unwrap());
        assert!(reopened.list(ResourceKind::Categories).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_record_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = JsonFileStore::open(&path).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let result = store
            .update(ResourceKind::Users, "nobody", json!({"id": "nobody"}))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_during_writes_see_whole_documents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = JsonFileStore::open(&path).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..20 {
            let writer = store.clone();
            tasks.push(tokio::spawn(async move {
                writer
                    .create(ResourceKind::Products, json!({"id": i, "name": "Scarf", "price": 9.0}))
                    .await
                    .map(|_| ())
            }));
            let reader = store.clone();
            tasks.push(tokio::spawn(async move {
                reader.list(ResourceKind::Products).await.map(|_| ())
            }));
        }

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.list(ResourceKind::Products).await.unwrap().len(), 20);
        assert!(!store.staging_path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let err = store.list(ResourceKind::Products).await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
