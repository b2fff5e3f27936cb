//! Core module: records, the list-view pipeline, query parameters and errors

pub mod error;
pub mod field;
pub mod list_view;
pub mod paginate;
pub mod query;
pub mod record;
pub mod search;
pub mod sort;

pub use error::{ShopError, ShopResult};
pub use field::FieldValue;
pub use list_view::{ListView, ListViewController};
pub use paginate::{Page, paginate};
pub use query::{PaginatedResponse, PaginationMeta, QueryParams};
pub use record::Record;
pub use sort::{SortDirection, SortState, next_sort_state};
