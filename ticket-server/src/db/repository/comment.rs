//! Comment Repository

use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Comment, CommentDetail, Role, UserRef};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

/// Flat row shape of the detail JOIN below
#[derive(sqlx::FromRow)]
struct CommentDetailRow {
    id: i64,
    comment: String,
    created_at: DateTime<Utc>,
    user_id: i64,
    user_name: String,
    user_email: String,
    user_role: Role,
    user_created_at: DateTime<Utc>,
}

impl From<CommentDetailRow> for CommentDetail {
    fn from(row: CommentDetailRow) -> Self {
        CommentDetail {
            id: row.id,
            comment: row.comment,
            user: UserRef {
                id: row.user_id,
                name: row.user_name,
                email: row.user_email,
                role: row.user_role,
                created_at: row.user_created_at,
            },
            created_at: row.created_at,
        }
    }
}

const DETAIL_SELECT: &str = "\
SELECT m.id, m.comment, m.created_at, \
       u.id AS user_id, u.name AS user_name, u.email AS user_email, \
       u.role AS user_role, u.created_at AS user_created_at \
  FROM ticket_comments m \
  JOIN users u ON u.id = m.user_id";

pub async fn create(
    pool: &SqlitePool,
    ticket_id: i64,
    user_id: i64,
    text: &str,
) -> RepoResult<CommentDetail> {
    let id = snowflake_id();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO ticket_comments (id, ticket_id, user_id, comment, created_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(ticket_id)
    .bind(user_id)
    .bind(text)
    .bind(now)
    .execute(pool)
    .await?;

    find_detail(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("failed to create comment".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Comment>> {
    let comment = sqlx::query_as::<_, Comment>(
        "SELECT id, ticket_id, user_id, comment, created_at FROM ticket_comments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(comment)
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<CommentDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE m.id = ?");
    let row: Option<CommentDetailRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row.map(Into::into))
}

/// Comments on a ticket, oldest first
pub async fn list_for_ticket(pool: &SqlitePool, ticket_id: i64) -> RepoResult<Vec<CommentDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE m.ticket_id = ? ORDER BY m.created_at");
    let rows: Vec<CommentDetailRow> = sqlx::query_as(&sql)
        .bind(ticket_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn update(pool: &SqlitePool, id: i64, text: &str) -> RepoResult<()> {
    let result = sqlx::query("UPDATE ticket_comments SET comment = ? WHERE id = ?")
        .bind(text)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("comment {id} not found")));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM ticket_comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
