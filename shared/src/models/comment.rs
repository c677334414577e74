//! Comment Model

use super::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Comment row, owned by its author
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Comment {
    pub id: i64,
    pub ticket_id: i64,
    pub user_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Comment response with the author hydrated into a user reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDetail {
    pub id: i64,
    pub comment: String,
    pub user: UserRef,
    pub created_at: DateTime<Utc>,
}

/// Create comment payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentCreate {
    #[validate(length(min = 1, message = "comment must not be empty"))]
    pub comment: String,
}

/// Update comment payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentUpdate {
    #[validate(length(min = 1, message = "comment must not be empty"))]
    pub comment: String,
}
