//! Shop resources and the write-path normalisation shared by all of them

pub mod models;
pub mod resource;

pub use models::{
    Category, Customer, Model, Order, OrderItem, OrderStatus, Product, RecordId, Review,
    ReviewAuthor, Role, User,
};
pub use resource::ResourceKind;

use crate::core::error::{RequestError, ShopError, ValidationError};
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Fields the server owns; clients cannot overwrite them on update
const SERVER_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

fn as_object(payload: Value) -> Result<Map<String, Value>, ShopError> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(RequestError::NotAnObject.into()),
    }
}

/// Validate a JSON object against model `M` and fold the normalized
/// fields back into it
///
/// Server-owned fields are kept out of the model, so ids of any shape pass
/// through unchanged. Fields the model does not name are preserved.
fn normalize<M: Model>(kind: ResourceKind, mut object: Map<String, Value>) -> Result<Value, ShopError> {
    let writable: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| !SERVER_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut model: M =
        serde_json::from_value(Value::Object(writable)).map_err(|e| ValidationError::Malformed {
            resource: kind.to_string(),
            message: e.to_string(),
        })?;

    model.finalize();

    model.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        ValidationError::Fields {
            resource: kind.to_string(),
            fields,
            message: errors.to_string(),
        }
    })?;

    match serde_json::to_value(&model).map_err(|e| ShopError::Internal(e.to_string()))? {
        Value::Object(normalized) => object.extend(normalized),
        other => {
            return Err(ShopError::Internal(format!(
                "{} model serialized to a non-object: {}",
                kind, other
            )));
        }
    }

    Ok(Value::Object(object))
}

fn normalize_for(kind: ResourceKind, object: Map<String, Value>) -> Result<Value, ShopError> {
    match kind {
        ResourceKind::Products => normalize::<Product>(kind, object),
        ResourceKind::Categories => normalize::<Category>(kind, object),
        ResourceKind::Orders => normalize::<Order>(kind, object),
        ResourceKind::Reviews => normalize::<Review>(kind, object),
        ResourceKind::Users => normalize::<User>(kind, object),
        ResourceKind::Roles => normalize::<Role>(kind, object),
    }
}

/// Build a new record from a client payload
///
/// Assigns a fresh UUID and `created_at`, ignoring any the client sent.
pub fn prepare_create(kind: ResourceKind, payload: Value) -> Result<Value, ShopError> {
    let mut object = as_object(payload)?;
    for field in SERVER_FIELDS {
        object.remove(*field);
    }
    object.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    object.insert("created_at".to_string(), Value::String(Utc::now().to_rfc3339()));

    normalize_for(kind, object)
}

/// Apply a partial update to an existing record
///
/// Top-level keys of `patch` replace those of `existing`; nested objects
/// are replaced whole. Server-owned fields are kept from `existing`. An
/// order whose `items` change without a new `total` gets its total
/// recomputed.
pub fn prepare_update(kind: ResourceKind, existing: &Value, patch: Value) -> Result<Value, ShopError> {
    let patch = as_object(patch)?;
    let mut object = existing.as_object().cloned().unwrap_or_default();

    if kind == ResourceKind::Orders && patch.contains_key("items") && !patch.contains_key("total") {
        object.remove("total");
    }

    for (key, value) in patch {
        if !SERVER_FIELDS.contains(&key.as_str()) {
            object.insert(key, value);
        }
    }
    object.insert("updated_at".to_string(), Value::String(Utc::now().to_rfc3339()));

    normalize_for(kind, object)
}
