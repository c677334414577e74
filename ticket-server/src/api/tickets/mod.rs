//! Ticket API Module
//!
//! Route-level gates enforce the role capability table; per-ticket
//! visibility is checked inside the handlers, after existence.

mod handler;

use axum::{Router, middleware, routing::get, routing::patch};

use crate::auth::require_action;
use crate::core::ServerState;
use crate::policy::capability::TicketAction;

/// Ticket router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tickets", routes())
}

fn routes() -> Router<ServerState> {
    // Listing, single reads and comment participation are open to every
    // authenticated role; visibility scoping happens in the handlers.
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/history", get(handler::history))
        .route(
            "/{id}/comments",
            get(handler::list_comments).post(handler::post_comment),
        );

    let create_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .layer(middleware::from_fn(require_action(TicketAction::Create)));

    let assign_routes = Router::new()
        .route("/{id}/assign", patch(handler::assign))
        .layer(middleware::from_fn(require_action(TicketAction::Assign)));

    let status_routes = Router::new()
        .route("/{id}/status", patch(handler::change_status))
        .layer(middleware::from_fn(require_action(
            TicketAction::ChangeStatus,
        )));

    let delete_routes = Router::new()
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_action(TicketAction::Delete)));

    read_routes
        .merge(create_routes)
        .merge(assign_routes)
        .merge(status_routes)
        .merge(delete_routes)
}
