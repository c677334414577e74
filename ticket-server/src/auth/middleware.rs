//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role gating.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::policy::capability::{TicketAction, role_can};
use crate::security_log;
use shared::error::{AppError, ErrorCode};

/// Authentication middleware - requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success, injects [`CurrentUser`] into the request extensions.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (health endpoints; unknown paths 404 as usual)
/// - `/api/auth/login`
///
/// # Errors
///
/// | Error | HTTP status |
/// |-------|-------------|
/// | Missing Authorization header | 401 Unauthorized |
/// | Expired token | 401 TokenExpired |
/// | Invalid token | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight OPTIONS requests through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip authentication (health, 404s)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // Public API routes skip authentication
    if path == "/api/auth/login" {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Capability middleware - requires the role to allow a ticket action
///
/// The role/action table lives in [`crate::policy::capability`]; this
/// layer is just its enforcement point at the route boundary. Per-ticket
/// visibility is a separate check inside the handlers.
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/tickets", post(handler::create))
///     .layer(middleware::from_fn(require_action(TicketAction::Create)));
/// ```
///
/// # Errors
///
/// Returns 403 Forbidden when the role does not allow the action.
pub fn require_action(
    action: TicketAction,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if !role_can(user.role, action) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    user_id = user.id,
                    user_role = user.role.as_str(),
                    action = format!("{:?}", action)
                );
                return Err(AppError::new(ErrorCode::PermissionDenied)
                    .with_detail("action", format!("{:?}", action)));
            }

            Ok(next.run(req).await)
        })
    }
}

/// Manager middleware - requires the manager role
///
/// # Errors
///
/// Returns 403 Forbidden for non-managers.
pub async fn require_manager(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !user.is_manager() {
        security_log!(
            "WARN",
            "manager_required",
            user_id = user.id,
            user_role = user.role.as_str()
        );
        return Err(AppError::new(ErrorCode::ManagerRequired));
    }

    Ok(next.run(req).await)
}

/// Extension trait to pull the CurrentUser out of a request
pub trait CurrentUserExt {
    /// Get the CurrentUser from request extensions
    ///
    /// # Errors
    ///
    /// Returns 401 Unauthorized if no user was injected.
    fn current_user(&self) -> Result<&CurrentUser, AppError>;
}

impl CurrentUserExt for Request {
    fn current_user(&self) -> Result<&CurrentUser, AppError> {
        self.extensions()
            .get::<CurrentUser>()
            .ok_or(AppError::unauthorized())
    }
}
