//! In-memory implementation of RecordStore for testing and development

use super::{Database, RecordStore};
use crate::core::error::StorageError;
use crate::entities::ResourceKind;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    db: Arc<RwLock<Database>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `db`
    pub fn with_data(db: Database) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
        }
    }

    /// Copy of the whole document
    pub fn snapshot(&self) -> Result<Database, StorageError> {
        self.db
            .read()
            .map(|db| db.clone())
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Value>, StorageError> {
        let db = self
            .db
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(db.collection(kind).clone())
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>, StorageError> {
        let db = self
            .db
            .read()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire read lock: {}", e)))?;

        Ok(db.find(kind, id).cloned())
    }

    async fn create(&self, kind: ResourceKind, record: Value) -> Result<Value, StorageError> {
        let mut db = self
            .db
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        db.collection_mut(kind).push(record.clone());

        Ok(record)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        record: Value,
    ) -> Result<Option<Value>, StorageError> {
        let mut db = self
            .db
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        Ok(db.replace(kind, id, record))
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<bool, StorageError> {
        let mut db = self
            .db
            .write()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire write lock: {}", e)))?;

        Ok(db.remove(kind, id))
    }
}
