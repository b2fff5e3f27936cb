//! REST API exposure for the shop
//!
//! Consumes the shared [`AppState`] and produces an Axum `Router`.

use super::handlers::{
    AppState, create_record, delete_record, get_record, list_records, update_record,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Resource list/CRUD routes under `/api`
    /// - Custom routes
    pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(Self::resource_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    }

    /// Routes shared by every resource
    ///
    /// - GET    /api/{resource}       - Filtered, sorted, paginated list
    /// - POST   /api/{resource}       - Create
    /// - GET    /api/{resource}/{id}  - Fetch one
    /// - PUT    /api/{resource}/{id}  - Partial update
    /// - DELETE /api/{resource}/{id}  - Delete
    fn resource_routes(state: AppState) -> Router {
        Router::new()
            .route("/api/{resource}", get(list_records).post(create_record))
            .route(
                "/api/{resource}/{id}",
                get(get_record).put(update_record).delete(delete_record),
            )
            .with_state(state)
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "crochet-admin"
        }))
    }
}
