//! HTTP handlers for shop resources
//!
//! Every handler is resource-agnostic: the `{resource}` path segment picks
//! the collection, and the typed models in [`crate::entities`] validate
//! writes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;

use crate::config::ShopConfig;
use crate::core::error::{EntityError, RequestError, ShopResult};
use crate::core::list_view::ListViewController;
use crate::core::query::{PaginatedResponse, QueryParams};
use crate::entities::{self, ResourceKind};
use crate::storage::RecordStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: Arc<ShopConfig>,
}

fn not_found(kind: ResourceKind, id: &str) -> EntityError {
    EntityError::NotFound {
        resource: kind.to_string(),
        id: id.to_string(),
    }
}

/// GET /api/{resource}
///
/// Query params: `?page=2&limit=10&q=bag&sort=price:desc&filter={"status":"pending"}`
pub async fn list_records(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<QueryParams>,
) -> ShopResult<Json<PaginatedResponse<Value>>> {
    let kind: ResourceKind = resource.parse()?;

    let sort = params
        .sort_state()
        .map_err(|expr| RequestError::InvalidSort { expr })?;
    let filters = params
        .field_filters()
        .map_err(|message| RequestError::InvalidFilter { message })?;
    let limit = params.limit(
        state.config.items_per_page(kind),
        state.config.max_items_per_page,
    );

    let records = state.store.list(kind).await?;

    let mut list = ListViewController::new(records, state.config.search_fields(kind), limit);
    for (path, value) in filters {
        list.set_filter(path, Some(value));
    }
    list.set_query(params.query());
    list.set_sort(sort);
    list.set_page(params.page());

    let view = list.view();
    tracing::debug!(
        resource = %kind,
        page = view.current_page,
        total = view.total_count,
        "Listed records"
    );

    Ok(Json(PaginatedResponse::from_view(view, limit)))
}

/// GET /api/{resource}/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> ShopResult<Json<Value>> {
    let kind: ResourceKind = resource.parse()?;

    let record = state
        .store
        .get(kind, &id)
        .await?
        .ok_or_else(|| not_found(kind, &id))?;

    Ok(Json(record))
}

/// POST /api/{resource}
pub async fn create_record(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Json(payload): Json<Value>,
) -> ShopResult<impl IntoResponse> {
    let kind: ResourceKind = resource.parse()?;

    let record = entities::prepare_create(kind, payload)?;
    let created = state.store.create(kind, record).await?;

    tracing::info!(resource = %kind, id = %created["id"], "Created record");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{resource}/{id}
pub async fn update_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    Json(patch): Json<Value>,
) -> ShopResult<Json<Value>> {
    let kind: ResourceKind = resource.parse()?;

    let existing = state
        .store
        .get(kind, &id)
        .await?
        .ok_or_else(|| not_found(kind, &id))?;

    let record = entities::prepare_update(kind, &existing, patch)?;
    let updated = state
        .store
        .update(kind, &id, record)
        .await?
        .ok_or_else(|| not_found(kind, &id))?;

    tracing::info!(resource = %kind, id = %id, "Updated record");
    Ok(Json(updated))
}

/// DELETE /api/{resource}/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> ShopResult<StatusCode> {
    let kind: ResourceKind = resource.parse()?;

    if !state.store.delete(kind, &id).await? {
        return Err(not_found(kind, &id).into());
    }

    tracing::info!(resource = %kind, id = %id, "Deleted record");
    Ok(StatusCode::NO_CONTENT)
}
