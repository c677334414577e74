//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health checks (public)
//! - [`auth`] - login
//! - [`users`] - user management (manager only)
//! - [`tickets`] - ticket lifecycle, assignment, comments
//! - [`comments`] - comment edit/delete

pub mod auth;
pub mod comments;
pub mod health;
pub mod tickets;
pub mod users;

use axum::{Router, middleware};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(tickets::router())
        .merge(comments::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

// Re-export common types for handlers
pub use crate::utils::{AppResult, ApiResponse};
