//! The record abstraction consumed by list views

use crate::core::field::{FieldValue, resolve_path};
use serde_json::Value;

/// One item of a displayed list (a product, an order, a user...)
///
/// List views never mutate records. They only read field values through
/// this accessor, which is the single place where field access is dynamic.
pub trait Record {
    /// Resolve a dot-path (`"customer.name"`) to a scalar value
    ///
    /// Returns `None` when the path is missing or lands on an array/object.
    fn field_value(&self, path: &str) -> Option<FieldValue>;
}

impl Record for Value {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        resolve_path(self, path).and_then(FieldValue::from_json)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        (**self).field_value(path)
    }
}
