//! User API Handlers

use axum::{Extension, Json, extract::State};

use crate::audit_log;
use crate::auth::{CurrentUser, hash_password};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppResult, validate_payload};
use shared::models::{UserCreate, UserRef};

/// POST /api/users - Create a user with an explicit role
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserRef>> {
    validate_payload(&payload)?;

    tracing::info!(
        operator_id = current_user.id,
        email = %payload.email,
        role = payload.role.as_str(),
        "Creating user"
    );

    let password_hash = hash_password(&payload.password)?;
    let created = user::create(&state.pool, &payload, &password_hash).await?;

    audit_log!(
        "user_created",
        "user",
        created.id,
        operator_id = current_user.id,
        role = created.role.as_str()
    );

    Ok(Json(created.to_ref()))
}

/// GET /api/users - List all users
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<UserRef>>> {
    tracing::info!(operator_id = current_user.id, "Fetching users");

    let users = user::find_all(&state.pool).await?;
    Ok(Json(users.iter().map(|u| u.to_ref()).collect()))
}
