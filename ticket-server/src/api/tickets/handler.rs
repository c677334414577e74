//! Ticket API Handlers
//!
//! Every single-ticket handler follows the same order: load the ticket
//! (absence is not-found), then run the access or lifecycle rule, then
//! act. Not-found and denial are never conflated.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{comment, ticket, user};
use crate::policy;
use crate::policy::query::TicketListParams;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, validate_payload};
use shared::models::{
    AssignTicket, ChangeTicketStatus, CommentCreate, CommentDetail, TicketCreate, TicketDetail,
    TicketStatusLog,
};

async fn load_ticket(state: &ServerState, id: i64) -> AppResult<shared::models::Ticket> {
    ticket::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TicketNotFound))
}

async fn load_detail(state: &ServerState, id: i64) -> AppResult<TicketDetail> {
    ticket::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TicketNotFound))
}

/// POST /api/tickets - File a new ticket (status starts at OPEN)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<TicketCreate>,
) -> AppResult<Json<TicketDetail>> {
    validate_payload(&payload)?;

    tracing::info!(
        user_id = current_user.id,
        priority = payload.priority.as_str(),
        "Creating ticket"
    );

    let created = ticket::create(&state.pool, &payload, current_user.id).await?;

    audit_log!(
        "ticket_created",
        "ticket",
        created.id,
        operator_id = current_user.id,
        priority = created.priority.as_str()
    );

    load_detail(&state, created.id).await.map(Json)
}

/// GET /api/tickets - List tickets visible to the actor
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<TicketListParams>,
) -> AppResult<Json<Vec<TicketDetail>>> {
    let query = params.normalize();
    let scope = policy::scope_for(&current_user);

    let items = ticket::list(&state.pool, scope, &query).await?;
    Ok(Json(items))
}

/// GET /api/tickets/{id} - Fetch a single ticket
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<TicketDetail>> {
    let t = load_ticket(&state, id).await?;
    policy::ensure_can_view(&current_user, &t)?;

    load_detail(&state, id).await.map(Json)
}

/// PATCH /api/tickets/{id}/assign - Assign the ticket to a staff user
pub async fn assign(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignTicket>,
) -> AppResult<Json<TicketDetail>> {
    load_ticket(&state, id).await?;

    let candidate = user::find_by_id(&state.pool, payload.user_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    policy::ensure_assignable(&candidate)?;

    ticket::assign(&state.pool, id, candidate.id).await?;

    audit_log!(
        "ticket_assigned",
        "ticket",
        id,
        operator_id = current_user.id,
        assignee_id = candidate.id
    );

    load_detail(&state, id).await.map(Json)
}

/// PATCH /api/tickets/{id}/status - Advance the ticket one step
pub async fn change_status(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeTicketStatus>,
) -> AppResult<Json<TicketDetail>> {
    let t = load_ticket(&state, id).await?;
    policy::validate_transition(t.status, payload.status)?;

    let updated = ticket::transition_status(&state.pool, &t, payload.status, current_user.id).await?;

    audit_log!(
        "ticket_status_changed",
        "ticket",
        id,
        operator_id = current_user.id,
        from = t.status.as_str(),
        to = updated.status.as_str()
    );

    load_detail(&state, id).await.map(Json)
}

/// DELETE /api/tickets/{id} - Delete a ticket
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    load_ticket(&state, id).await?;

    ticket::delete(&state.pool, id).await?;

    audit_log!(
        "ticket_deleted",
        "ticket",
        id,
        operator_id = current_user.id
    );

    Ok(Json(ApiResponse::ok_with_message("Ticket deleted")))
}

/// GET /api/tickets/{id}/history - Status-change audit trail
pub async fn history(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<TicketStatusLog>>> {
    let t = load_ticket(&state, id).await?;
    policy::ensure_can_view(&current_user, &t)?;

    let logs = ticket::status_history(&state.pool, id).await?;
    Ok(Json(logs))
}

/// POST /api/tickets/{id}/comments - Comment on a visible ticket
pub async fn post_comment(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<CommentCreate>,
) -> AppResult<Json<CommentDetail>> {
    validate_payload(&payload)?;

    // Comment participation follows ticket visibility exactly
    let t = load_ticket(&state, id).await?;
    policy::ensure_can_view(&current_user, &t)?;

    let created = comment::create(&state.pool, id, current_user.id, &payload.comment).await?;

    audit_log!(
        "comment_posted",
        "comment",
        created.id,
        operator_id = current_user.id,
        ticket_id = id
    );

    Ok(Json(created))
}

/// GET /api/tickets/{id}/comments - List comments on a visible ticket
pub async fn list_comments(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<CommentDetail>>> {
    let t = load_ticket(&state, id).await?;
    policy::ensure_can_view(&current_user, &t)?;

    let comments = comment::list_for_ticket(&state.pool, id).await?;
    Ok(Json(comments))
}
