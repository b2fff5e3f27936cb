//! Typed error handling for the shop API
//!
//! # Error Categories
//!
//! - [`EntityError`]: record lookups and unknown resources
//! - [`ValidationError`]: request bodies that fail model validation
//! - [`StorageError`]: the JSON data file could not be read or written
//! - [`ConfigError`]: configuration parsing
//! - [`RequestError`]: malformed query parameters
//!
//! List-view computation itself never fails; errors only come from the
//! HTTP and storage edges.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result alias used across handlers and stores
pub type ShopResult<T> = Result<T, ShopError>;

/// The main error type for the shop API
#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    /// Should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ShopError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::Entity(e) => e.status_code(),
            ShopError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ShopError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShopError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShopError::Request(_) => StatusCode::BAD_REQUEST,
            ShopError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ShopError::Entity(e) => e.error_code(),
            ShopError::Validation(_) => "VALIDATION_ERROR",
            ShopError::Storage(_) => "STORAGE_ERROR",
            ShopError::Config(_) => "CONFIG_ERROR",
            ShopError::Request(e) => e.error_code(),
            ShopError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ShopError::Entity(EntityError::NotFound { resource, id }) => Some(serde_json::json!({
                "resource": resource,
                "id": id
            })),
            ShopError::Validation(ValidationError::Fields { fields, .. }) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::warn!(code = self.error_code(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to record lookups
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Unknown resource: {resource}")]
    UnknownResource { resource: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::UnknownResource { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::UnknownResource { .. } => "UNKNOWN_RESOURCE",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when a request body does not describe a valid record
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body is not shaped like the resource's model
    #[error("Invalid {resource} payload: {message}")]
    Malformed { resource: String, message: String },

    /// The body parsed but some fields break validation rules
    #[error("Invalid {resource}: {message}")]
    Fields {
        resource: String,
        fields: Vec<String>,
        message: String,
    },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the record store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access data file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file '{path}' is not a valid store document: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Store lock poisoned: {0}")]
    Lock(String),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors caused by malformed query parameters or paths
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid sort expression '{expr}' (expected field, field:asc or field:desc)")]
    InvalidSort { expr: String },

    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("Request body must be a JSON object")]
    NotAnObject,
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidSort { .. } => "INVALID_SORT",
            RequestError::InvalidFilter { .. } => "INVALID_FILTER",
            RequestError::NotAnObject => "INVALID_BODY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ShopError::from(EntityError::NotFound {
            resource: "products".to_string(),
            id: "abc".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");

        let response = err.to_response();
        assert_eq!(response.message, "products with id 'abc' not found");
        assert_eq!(response.details.unwrap()["id"], "abc");
    }

    #[test]
    fn test_unknown_resource_maps_to_400() {
        let err = ShopError::from(EntityError::UnknownResource {
            resource: "widgets".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "UNKNOWN_RESOURCE");
    }

    #[test]
    fn test_validation_details_list_fields() {
        let err = ShopError::from(ValidationError::Fields {
            resource: "users".to_string(),
            fields: vec!["email".to_string()],
            message: "email: invalid".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_response().details.unwrap()["fields"][0], "email");
    }

    #[test]
    fn test_request_errors_are_bad_requests() {
        let err = ShopError::from(RequestError::InvalidSort {
            expr: "price:up".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_SORT");
    }
}
