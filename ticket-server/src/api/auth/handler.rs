//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult, validate_payload};
use crate::{audit_log, security_log};
use shared::models::{LoginRequest, LoginResponse};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token. Unknown email
/// and wrong password produce the same outcome so accounts cannot be
/// enumerated.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_payload(&req)?;

    let found = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay before acting on the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(account) = found else {
        security_log!("WARN", "login_failed", reason = "user_not_found");
        tracing::warn!(email = %req.email, "Login failed - user not found");
        return Err(AppError::invalid_credentials());
    };

    let password_valid = crate::auth::verify_password(&req.password, &account.password_hash)?;
    if !password_valid {
        security_log!("WARN", "login_failed", reason = "invalid_credentials");
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(account.id, &account.email, account.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    audit_log!("login_success", "user", account.id);

    Ok(Json(LoginResponse {
        token,
        user: account.to_ref(),
    }))
}
