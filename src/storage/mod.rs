//! Record storage for the shop's collections
//!
//! Both backends hold the same [`Database`] document. The in-memory store
//! is used by tests and local development; the JSON file store reads the
//! whole file for every operation and rewrites it after every mutation.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use crate::core::error::StorageError;
use crate::entities::ResourceKind;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage trait for the shop's record collections
///
/// Records are opaque JSON objects identified by their `"id"` field.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records of a collection, in stored order
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Value>, StorageError>;

    /// A single record by id
    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>, StorageError>;

    /// Append a record
    async fn create(&self, kind: ResourceKind, record: Value) -> Result<Value, StorageError>;

    /// Replace a record; `None` when no record has this id
    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        record: Value,
    ) -> Result<Option<Value>, StorageError>;

    /// Remove a record; `false` when no record has this id
    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<bool, StorageError>;
}

/// The whole data file: one array per resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub products: Vec<Value>,
    #[serde(default)]
    pub categories: Vec<Value>,
    #[serde(default)]
    pub orders: Vec<Value>,
    #[serde(default)]
    pub reviews: Vec<Value>,
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub roles: Vec<Value>,
}

impl Database {
    pub fn collection(&self, kind: ResourceKind) -> &Vec<Value> {
        match kind {
            ResourceKind::Products => &self.products,
            ResourceKind::Categories => &self.categories,
            ResourceKind::Orders => &self.orders,
            ResourceKind::Reviews => &self.reviews,
            ResourceKind::Users => &self.users,
            ResourceKind::Roles => &self.roles,
        }
    }

    pub fn collection_mut(&mut self, kind: ResourceKind) -> &mut Vec<Value> {
        match kind {
            ResourceKind::Products => &mut self.products,
            ResourceKind::Categories => &mut self.categories,
            ResourceKind::Orders => &mut self.orders,
            ResourceKind::Reviews => &mut self.reviews,
            ResourceKind::Users => &mut self.users,
            ResourceKind::Roles => &mut self.roles,
        }
    }

    pub fn find(&self, kind: ResourceKind, id: &str) -> Option<&Value> {
        self.collection(kind).iter().find(|record| has_id(record, id))
    }

    /// Replace the record with `id` in place, keeping its position
    pub fn replace(&mut self, kind: ResourceKind, id: &str, record: Value) -> Option<Value> {
        let slot = self
            .collection_mut(kind)
            .iter_mut()
            .find(|existing| has_id(existing, id))?;
        *slot = record.clone();
        Some(record)
    }

    pub fn remove(&mut self, kind: ResourceKind, id: &str) -> bool {
        let records = self.collection_mut(kind);
        let before = records.len();
        records.retain(|record| !has_id(record, id));
        records.len() != before
    }
}

/// Whether `record` carries this id
///
/// Seeded data files may use numeric ids, so numbers match their decimal
/// string form.
pub fn has_id(record: &Value, id: &str) -> bool {
    match record.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}
