//! # Crochet Admin
//!
//! Storefront and back-office API for a handmade crochet shop.
//!
//! ## Features
//!
//! - **List views**: every admin table (products, categories, orders,
//!   reviews, users, roles) shares one filter → sort → paginate pipeline
//! - **Stable sorting** on dot-path keys, with absent values always last
//! - **Case-insensitive search** across configurable fields
//! - **Flat-file persistence**: a single JSON document rewritten on every change
//! - **Validated writes** through typed models
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crochet::prelude::*;
//!
//! let store = JsonFileStore::open("data/db.json").await?;
//!
//! ServerBuilder::new()
//!     .with_config(ShopConfig::from_env()?)
//!     .with_store(store)
//!     .serve()
//!     .await?;
//! ```
//!
//! The list pipeline can also be driven directly:
//!
//! ```rust
//! use crochet::prelude::*;
//! use serde_json::json;
//!
//! let orders = vec![
//!     json!({"id": 1, "status": "pending", "total": 40.0}),
//!     json!({"id": 2, "status": "shipped", "total": 15.0}),
//!     json!({"id": 3, "status": "pending", "total": 22.0}),
//! ];
//!
//! let mut list = ListViewController::new(orders, vec!["status".to_string()], 10);
//! list.set_filter("status", Some(FieldValue::String("pending".to_string())));
//! list.request_sort("total");
//!
//! let view = list.view();
//! assert_eq!(view.total_count, 2);
//! assert_eq!(view.items[0]["id"], 3);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === List views ===
    pub use crate::core::{
        field::FieldValue,
        list_view::{ListView, ListViewController},
        paginate::{Page, paginate},
        record::Record,
        search::filter,
        sort::{SortDirection, SortState, next_sort_state, sort},
    };

    // === HTTP ===
    pub use crate::core::error::{
        ConfigError, EntityError, RequestError, ShopError, ShopResult, StorageError,
        ValidationError,
    };
    pub use crate::core::query::{PaginatedResponse, PaginationMeta, QueryParams};
    pub use crate::server::{AppState, RestExposure, ServerBuilder};

    // === Resources ===
    pub use crate::entities::{ResourceKind, prepare_create, prepare_update};

    // === Storage ===
    pub use crate::storage::{Database, InMemoryStore, JsonFileStore, RecordStore};

    // === Config ===
    pub use crate::config::{ResourceConfig, ServerConfig, ShopConfig};
}
