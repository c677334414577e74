//! Comment API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::comment;
use crate::policy;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, validate_payload};
use shared::models::{Comment, CommentDetail, CommentUpdate};

async fn load_comment(state: &ServerState, id: i64) -> AppResult<Comment> {
    comment::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CommentNotFound))
}

/// PATCH /api/comments/{id} - Edit a comment (author or manager)
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<CommentUpdate>,
) -> AppResult<Json<CommentDetail>> {
    validate_payload(&payload)?;

    let existing = load_comment(&state, id).await?;
    policy::ensure_can_modify(&current_user, &existing)?;

    comment::update(&state.pool, id, &payload.comment).await?;

    audit_log!(
        "comment_updated",
        "comment",
        id,
        operator_id = current_user.id,
        ticket_id = existing.ticket_id
    );

    comment::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CommentNotFound))
        .map(Json)
}

/// DELETE /api/comments/{id} - Delete a comment (author or manager)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let existing = load_comment(&state, id).await?;
    policy::ensure_can_modify(&current_user, &existing)?;

    comment::delete(&state.pool, id).await?;

    audit_log!(
        "comment_deleted",
        "comment",
        id,
        operator_id = current_user.id,
        ticket_id = existing.ticket_id
    );

    Ok(Json(ApiResponse::ok_with_message("Comment deleted")))
}
