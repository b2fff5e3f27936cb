//! Field value types and dot-path resolution

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// A scalar field value resolved from a record
///
/// Only scalars are comparable. Arrays and objects never become a
/// `FieldValue`; resolving a path that lands on one yields `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    /// Convert a JSON value into a scalar field value
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(FieldValue::String(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(FieldValue::Integer(i)),
                None => n.as_f64().map(FieldValue::Float),
            },
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Null => Some(FieldValue::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of an integer or float; lossy above 2^53
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Boolean(_) => 0,
            FieldValue::Integer(_) | FieldValue::Float(_) => 1,
            FieldValue::String(_) => 2,
            FieldValue::Null => 3,
        }
    }

    /// Total order over present values
    ///
    /// Values of different kinds order by kind: booleans, then numbers,
    /// then strings. Null is greater than everything else.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (FieldValue::Float(a), FieldValue::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (FieldValue::Integer(a), FieldValue::Float(b)) => cmp_int_float(*a, *b),
            (FieldValue::Float(a), FieldValue::Integer(b)) => cmp_int_float(*b, *a).reverse(),
            (a, b) => a.type_rank().cmp(&b.type_rank()),
        }
    }

    /// Numeric equality, exact across integers and floats
    pub fn numeric_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                FieldValue::Integer(_) | FieldValue::Float(_),
                FieldValue::Integer(_) | FieldValue::Float(_),
            ) => self.total_cmp(other) == Ordering::Equal,
            _ => false,
        }
    }
}

/// Compare an integer against a float without rounding the integer
///
/// Casting `i64` to `f64` loses precision above 2^53, which would make
/// the order non-transitive.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63

    if float.is_nan() {
        return Ordering::Equal;
    }
    if float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }

    // In range and integral, so the cast is exact
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
        unequal => unequal,
    }
}

/// Resolve a dot-separated path such as `"user.name"` inside a JSON value
///
/// Numeric segments index into arrays (`"items.0.name"`). Any segment that
/// does not exist resolves the whole path to `None`.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_from_json() {
        assert_eq!(FieldValue::from_json(&json!(42)), Some(FieldValue::Integer(42)));
        assert_eq!(FieldValue::from_json(&json!(4.5)), Some(FieldValue::Float(4.5)));
        assert_eq!(FieldValue::from_json(&json!(true)), Some(FieldValue::Boolean(true)));
        assert_eq!(FieldValue::from_json(&json!(null)), Some(FieldValue::Null));
        assert_eq!(FieldValue::from_json(&json!({"a": 1})), None);
        assert_eq!(FieldValue::from_json(&json!([1, 2])), None);
    }

    #[test]
    fn test_resolve_nested_path() {
        let record = json!({"user": {"name": "Ada", "tags": ["a", "b"]}});
        assert_eq!(resolve_path(&record, "user.name"), Some(&json!("Ada")));
        assert_eq!(resolve_path(&record, "user.tags.1"), Some(&json!("b")));
        assert_eq!(resolve_path(&record, "user.missing"), None);
        assert_eq!(resolve_path(&record, "user.name.first"), None);
        assert_eq!(resolve_path(&record, ""), None);
    }

    #[test]
    fn test_mixed_numbers_compare_numerically() {
        let int = FieldValue::Integer(2);
        let float = FieldValue::Float(1.5);
        assert_eq!(int.total_cmp(&float), Ordering::Greater);
        assert_eq!(float.total_cmp(&int), Ordering::Less);
    }

    #[test]
    fn test_large_integers_against_floats_stay_transitive() {
        let two_53 = 9_007_199_254_740_992_i64;
        let above = FieldValue::Integer(two_53 + 1);
        let exact = FieldValue::Integer(two_53);
        let float = FieldValue::Float(two_53 as f64);

        assert_eq!(above.total_cmp(&exact), Ordering::Greater);
        assert_eq!(exact.total_cmp(&float), Ordering::Equal);
        assert_eq!(above.total_cmp(&float), Ordering::Greater);
        assert_eq!(float.total_cmp(&above), Ordering::Less);

        assert_eq!(FieldValue::Integer(i64::MAX).total_cmp(&FieldValue::Float(1e19)), Ordering::Less);
        assert_eq!(FieldValue::Integer(i64::MIN).total_cmp(&FieldValue::Float(-1e19)), Ordering::Greater);
        assert_eq!(FieldValue::Integer(-2).total_cmp(&FieldValue::Float(-2.5)), Ordering::Greater);
        assert_eq!(FieldValue::Integer(-3).total_cmp(&FieldValue::Float(-2.5)), Ordering::Less);
    }

    #[test]
    fn test_numeric_eq() {
        assert!(FieldValue::Integer(5).numeric_eq(&FieldValue::Float(5.0)));
        assert!(!FieldValue::Integer(5).numeric_eq(&FieldValue::Float(5.5)));
        assert!(!FieldValue::Integer(5).numeric_eq(&FieldValue::String("5".to_string())));
    }

    #[test]
    fn test_mixed_kinds_order_by_kind() {
        let flag = FieldValue::Boolean(true);
        let number = FieldValue::Integer(-10);
        let text = FieldValue::String("a".to_string());
        assert_eq!(flag.total_cmp(&number), Ordering::Less);
        assert_eq!(number.total_cmp(&text), Ordering::Less);
        assert_eq!(text.total_cmp(&FieldValue::Null), Ordering::Less);
    }
}
