//! Column sorting for list views
//!
//! Sorting is stable and never touches the input slice; it returns a new
//! vector. Records whose sort key is missing or null are placed after every
//! record that has a value, whichever direction is active.

use crate::core::field::FieldValue;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Dot-path into the record (e.g. `"price"`, `"user.name"`)
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse a sort expression
    ///
    /// # Format
    /// - `field` or `field:asc` (ascending)
    /// - `field:desc` (descending)
    ///
    /// Returns `None` for an empty field or an unknown direction suffix.
    pub fn parse(expr: &str) -> Option<Self> {
        let expr = expr.trim();
        let (key, direction) = match expr.rsplit_once(':') {
            Some((key, "asc")) => (key, SortDirection::Ascending),
            Some((key, "desc")) => (key, SortDirection::Descending),
            Some(_) => return None,
            None => (expr, SortDirection::Ascending),
        };

        if key.is_empty() {
            return None;
        }

        Some(Self {
            key: key.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}:{}", self.key, suffix)
    }
}

/// Transition applied when a column header is clicked
///
/// The same key while ascending flips to descending. Anything else (no
/// sort, another key, or the same key while descending) becomes ascending
/// on `key`.
pub fn next_sort_state(current: Option<&SortState>, key: &str) -> SortState {
    match current {
        Some(state) if state.key == key && state.direction == SortDirection::Ascending => {
            SortState::descending(key)
        }
        _ => SortState::ascending(key),
    }
}

/// Compare two resolved keys, keeping absent values last in both directions
fn compare_keys(
    a: Option<&FieldValue>,
    b: Option<&FieldValue>,
    direction: SortDirection,
) -> Ordering {
    fn present(value: Option<&FieldValue>) -> Option<&FieldValue> {
        value.filter(|v| !v.is_null())
    }

    match (present(a), present(b)) {
        (Some(a), Some(b)) => {
            let ord = a.total_cmp(b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort `items` by `state`, or copy them unchanged when there is no sort
pub fn sort<T: Record + Clone>(items: &[T], state: Option<&SortState>) -> Vec<T> {
    let Some(state) = state else {
        return items.to_vec();
    };

    // Resolve every key once, then stable-sort the indices.
    let keys: Vec<Option<FieldValue>> = items
        .iter()
        .map(|item| item.field_value(&state.key))
        .collect();

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| compare_keys(keys[a].as_ref(), keys[b].as_ref(), state.direction));

    order.into_iter().map(|i| items[i].clone()).collect()
}
