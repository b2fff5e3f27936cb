//! Server module for building the shop's HTTP API
//!
//! This module provides a `ServerBuilder` that registers:
//! - List and CRUD routes for every shop resource
//! - Health check routes

pub mod builder;
pub mod handlers;
pub mod rest;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use rest::RestExposure;
