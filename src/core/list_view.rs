//! List-view controller shared by every admin table
//!
//! Composes search filtering, column sorting and pagination over an
//! in-memory list of records. The pipeline always runs in the same order:
//!
//! ```text
//! source ─▶ field filters + search ─▶ sort ─▶ paginate ─▶ ListView
//! ```
//!
//! Sorting acts on the filtered set so page counts reflect the filtered
//! total, and pagination acts on the sorted set so page N is the Nth slice
//! of the sorted, filtered data.
//!
//! # Example
//!
//! ```rust
//! use crochet::core::list_view::ListViewController;
//! use serde_json::json;
//!
//! let products = vec![
//!     json!({"name": "Red Bag", "price": 30}),
//!     json!({"name": "Blue Hat", "price": 12}),
//!     json!({"name": "Green Bag", "price": 18}),
//! ];
//!
//! let mut list = ListViewController::new(products, vec!["name".to_string()], 10);
//! list.set_query("bag");
//! list.request_sort("price");
//!
//! let view = list.view();
//! assert_eq!(view.total_count, 2);
//! assert_eq!(view.items[0]["name"], "Green Bag");
//! ```

use crate::core::field::FieldValue;
use crate::core::paginate::{self, Page};
use crate::core::record::Record;
use crate::core::search;
use crate::core::sort::{self, SortState, next_sort_state};
use serde::Serialize;
use std::collections::BTreeMap;

/// What a list view renders: the current page plus everything needed for
/// sort indicators and "Showing X to Y of Z" text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<T> {
    /// Filtered, sorted and paginated records for the current page
    pub items: Vec<T>,
    pub sort: Option<SortState>,
    pub current_page: usize,
    pub total_pages: usize,
    pub first_index: usize,
    pub last_index: usize,
    /// Number of records after filtering
    pub total_count: usize,
}

/// Sort, filter and page state for one list view
#[derive(Debug, Clone)]
pub struct ListViewController<T> {
    source: Vec<T>,
    search_fields: Vec<String>,
    items_per_page: usize,
    query: String,
    filters: BTreeMap<String, FieldValue>,
    sort: Option<SortState>,
    current_page: usize,
}

impl<T: Record + Clone> ListViewController<T> {
    /// Create a controller with no sort, an empty query and page 1
    pub fn new(items: Vec<T>, search_fields: Vec<String>, items_per_page: usize) -> Self {
        Self {
            source: items,
            search_fields,
            items_per_page: items_per_page.max(1),
            query: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            current_page: 1,
        }
    }

    /// The unfiltered source records
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Replace the source records after a re-fetch
    ///
    /// The current page is kept when it still exists, otherwise it moves to
    /// the last available page.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.source = items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search query; a different query returns to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.current_page = 1;
        }
    }

    pub fn filters(&self) -> &BTreeMap<String, FieldValue> {
        &self.filters
    }

    /// Set or clear an exact-match filter on `path` (e.g. an order status chip)
    ///
    /// Any change to the filter set returns to page 1.
    pub fn set_filter(&mut self, path: impl Into<String>, value: Option<FieldValue>) {
        let path = path.into();
        let changed = match value {
            Some(value) => self.filters.insert(path, value.clone()) != Some(value),
            None => self.filters.remove(&path).is_some(),
        };

        if changed {
            self.current_page = 1;
        }
    }

    /// Drop every exact-match filter
    pub fn clear_filters(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear();
            self.current_page = 1;
        }
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Column header click: toggle direction on the active key, or start
    /// ascending on a new one. The current page is preserved.
    pub fn request_sort(&mut self, key: &str) {
        self.sort = Some(next_sort_state(self.sort.as_ref(), key));
    }

    /// Install an explicit sort state. The current page is preserved.
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Move to page `page`, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Advance one page unless already on the last
    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    /// Go back one page unless already on the first
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Number of records that pass the field filters and the search query
    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.total_count(), self.items_per_page)
    }

    fn filtered(&self) -> Vec<T> {
        let narrowed: Vec<&T> = self
            .source
            .iter()
            .filter(|item| search::matches_field_filters(*item, &self.filters))
            .collect();

        search::filter(&narrowed, &self.query, &self.search_fields)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Run filter, sort and paginate for the current state
    pub fn view(&self) -> ListView<T> {
        let filtered = self.filtered();
        let total_count = filtered.len();
        let sorted = sort::sort(&filtered, self.sort.as_ref());

        let Page {
            page_items,
            total_pages,
            first_index,
            last_index,
        } = paginate::paginate(&sorted, self.current_page, self.items_per_page);

        ListView {
            items: page_items,
            sort: self.sort.clone(),
            current_page: self.current_page,
            total_pages,
            first_index,
            last_index,
            total_count,
        }
    }
}
