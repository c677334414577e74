//! Comment API Module
//!
//! Edit/delete of existing comments. Posting and reading comments live
//! under the ticket routes, gated by ticket visibility.

mod handler;

use axum::{Router, routing::patch};

use crate::core::ServerState;

/// Comment router - author-or-manager rule enforced in the handlers
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/comments/{id}",
        patch(handler::update).delete(handler::delete),
    )
}
