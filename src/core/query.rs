//! Query parameters and pagination utilities

use crate::core::field::FieldValue;
use crate::core::list_view::ListView;
use crate::core::sort::SortState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Query parameters for listing a resource
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_records(
///     Query(params): Query<QueryParams>,
/// ) -> Json<PaginatedResponse<Value>> {
///     // params.page() defaults to 1
/// }
///
/// // Usage:
/// GET /api/products?page=2&limit=10
/// GET /api/products?q=amigurumi&sort=price:desc
/// GET /api/orders?filter={"status": "pending"}
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: Option<usize>,

    /// Number of items per page
    pub limit: Option<usize>,

    /// Free-text search over the resource's search fields
    pub q: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    /// - nested fields use dots: `customer.name:asc`
    pub sort: Option<String>,

    /// Exact-match filters as a JSON object
    ///
    /// # Example
    /// ```text
    /// filter={"status": "pending", "customer.email": "olga@example.com"}
    /// ```
    pub filter: Option<String>,
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Get limit, falling back to `default` and capped at `max`
    pub fn limit(&self, default: usize, max: usize) -> usize {
        self.limit.unwrap_or(default).clamp(1, max.max(1))
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// Parsed sort expression; an empty parameter means no sort
    ///
    /// `Err` carries the rejected expression.
    pub fn sort_state(&self) -> Result<Option<SortState>, String> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(expr) => SortState::parse(expr).map(Some).ok_or_else(|| expr.to_string()),
        }
    }

    /// Parse the filter JSON into path/value pairs
    ///
    /// Only scalar values are accepted. `Err` carries a description of what
    /// was wrong with the parameter.
    pub fn field_filters(&self) -> Result<BTreeMap<String, FieldValue>, String> {
        let Some(raw) = self.filter.as_deref().filter(|s| !s.trim().is_empty()) else {
            return Ok(BTreeMap::new());
        };

        let value: Value =
            serde_json::from_str(raw).map_err(|e| format!("filter is not valid JSON: {}", e))?;
        let object = value
            .as_object()
            .ok_or_else(|| "filter must be a JSON object".to_string())?;

        object
            .iter()
            .map(|(path, value)| {
                FieldValue::from_json(value)
                    .map(|v| (path.clone(), v))
                    .ok_or_else(|| format!("filter value for '{}' must be a scalar", path))
            })
            .collect()
    }
}

/// Paginated response structure
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The records on this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,

    /// Active sort, for header indicators
    pub sort: Option<SortState>,
}

impl<T> PaginatedResponse<T> {
    pub fn from_view(view: ListView<T>, limit: usize) -> Self {
        let pagination = PaginationMeta {
            page: view.current_page,
            limit,
            total: view.total_count,
            total_pages: view.total_pages,
            has_next: view.current_page < view.total_pages,
            has_prev: view.current_page > 1,
            first_index: view.first_index,
            last_index: view.last_index,
        };

        Self {
            data: view.items,
            pagination,
            sort: view.sort,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages (at least 1)
    pub total_pages: usize,

    pub has_next: bool,
    pub has_prev: bool,

    /// "Showing first_index to last_index of total"
    pub first_index: usize,
    pub last_index: usize,
}
