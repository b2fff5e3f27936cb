//! Search filtering for list views

use crate::core::field::FieldValue;
use crate::core::record::Record;
use std::collections::BTreeMap;

/// Keep records where `query` appears in at least one of `fields`
///
/// Matching is a case-insensitive substring test. Only string values take
/// part; numbers and other scalars never match unless the caller stores
/// them as strings. An empty or whitespace-only query keeps everything.
pub fn filter<T: Record + Clone>(items: &[T], query: &str, fields: &[String]) -> Vec<T> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();

    items
        .iter()
        .filter(|item| matches_query(*item, &needle, fields))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased
fn matches_query<T: Record>(item: &T, needle: &str, fields: &[String]) -> bool {
    fields.iter().any(|field| {
        item.field_value(field)
            .as_ref()
            .and_then(FieldValue::as_string)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Exact-match filters applied upstream of the search box
///
/// Each entry is a dot-path and the value it must equal, e.g. an order
/// status chip `{"status": "pending"}`. Integers and floats that represent
/// the same number are considered equal.
pub fn matches_field_filters<T: Record>(item: &T, filters: &BTreeMap<String, FieldValue>) -> bool {
    filters.iter().all(|(path, expected)| {
        item.field_value(path).is_some_and(|actual| match (&actual, expected) {
            (FieldValue::Integer(_) | FieldValue::Float(_), FieldValue::Integer(_) | FieldValue::Float(_)) => {
                actual.numeric_eq(expected)
            }
            _ => &actual == expected,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_matches_substring_case_insensitively() {
        let items = vec![json!({"name": "Red Bag"}), json!({"name": "Blue Hat"})];
        let result = filter(&items, "bag", &fields(&["name"]));
        assert_eq!(result, vec![json!({"name": "Red Bag"})]);

        let result = filter(&items, "BLUE", &fields(&["name"]));
        assert_eq!(result, vec![json!({"name": "Blue Hat"})]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = vec![json!({"name": "a"}), json!({"name": "b"})];
        assert_eq!(filter(&items, "", &fields(&["name"])), items);
        assert_eq!(filter(&items, "   ", &fields(&["name"])), items);
    }

    #[test]
    fn test_any_field_is_enough() {
        let items = vec![
            json!({"name": "Amigurumi Fox", "description": "orange yarn"}),
            json!({"name": "Granny Square", "description": "wool blanket"}),
        ];
        let result = filter(&items, "yarn", &fields(&["name", "description"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], "Amigurumi Fox");
    }

    #[test]
    fn test_nested_fields_are_searchable() {
        let items = vec![
            json!({"id": 1, "customer": {"name": "Olga"}}),
            json!({"id": 2, "customer": {"name": "Ivan"}}),
        ];
        let result = filter(&items, "olg", &fields(&["customer.name"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["id"], 1);
    }

    #[test]
    fn test_non_string_values_never_match() {
        let items = vec![json!({"name": "Tote", "price": 25})];
        assert!(filter(&items, "25", &fields(&["price"])).is_empty());
    }

    #[test]
    fn test_filter_never_grows() {
        let items: Vec<Value> = (0..10).map(|i| json!({"name": format!("item {i}")})).collect();
        for query in ["", "item", "1", "zzz", "ITEM 9"] {
            assert!(filter(&items, query, &fields(&["name"])).len() <= items.len());
        }
    }

    #[test]
    fn test_field_filters_require_exact_match() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), FieldValue::String("pending".to_string()));

        assert!(matches_field_filters(&json!({"status": "pending"}), &filters));
        assert!(!matches_field_filters(&json!({"status": "shipped"}), &filters));
        assert!(!matches_field_filters(&json!({}), &filters));
        assert!(matches_field_filters(&json!({}), &BTreeMap::new()));
    }

    #[test]
    fn test_field_filters_compare_numbers_by_value() {
        let mut filters = BTreeMap::new();
        filters.insert("rating".to_string(), FieldValue::Float(5.0));
        assert!(matches_field_filters(&json!({"rating": 5}), &filters));
    }
}
