//! Ticket Repository
//!
//! Single-row reads establish existence before any access decision runs
//! in the handler. The status transition executes as one transaction so
//! the ticket row and its status-log entry land together or not at all.

use super::{RepoError, RepoResult};
use crate::policy::query::TicketListQuery;
use crate::policy::scope::VisibilityScope;
use chrono::{DateTime, Utc};
use shared::error::ErrorCode;
use shared::models::{
    Role, Ticket, TicketCreate, TicketDetail, TicketPriority, TicketStatus, TicketStatusLog,
    UserRef,
};
use shared::util::snowflake_id;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Flat row shape of the detail JOIN below
#[derive(sqlx::FromRow)]
struct TicketDetailRow {
    id: i64,
    title: String,
    description: String,
    status: TicketStatus,
    priority: TicketPriority,
    created_at: DateTime<Utc>,
    creator_id: i64,
    creator_name: String,
    creator_email: String,
    creator_role: Role,
    creator_created_at: DateTime<Utc>,
    assignee_id: Option<i64>,
    assignee_name: Option<String>,
    assignee_email: Option<String>,
    assignee_role: Option<Role>,
    assignee_created_at: Option<DateTime<Utc>>,
}

impl From<TicketDetailRow> for TicketDetail {
    fn from(row: TicketDetailRow) -> Self {
        let assigned_to = match (
            row.assignee_id,
            row.assignee_name,
            row.assignee_email,
            row.assignee_role,
            row.assignee_created_at,
        ) {
            (Some(id), Some(name), Some(email), Some(role), Some(created_at)) => Some(UserRef {
                id,
                name,
                email,
                role,
                created_at,
            }),
            _ => None,
        };

        TicketDetail {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status,
            priority: row.priority,
            created_by: UserRef {
                id: row.creator_id,
                name: row.creator_name,
                email: row.creator_email,
                role: row.creator_role,
                created_at: row.creator_created_at,
            },
            assigned_to,
            created_at: row.created_at,
        }
    }
}

const DETAIL_SELECT: &str = "\
SELECT t.id, t.title, t.description, t.status, t.priority, t.created_at, \
       c.id AS creator_id, c.name AS creator_name, c.email AS creator_email, \
       c.role AS creator_role, c.created_at AS creator_created_at, \
       a.id AS assignee_id, a.name AS assignee_name, a.email AS assignee_email, \
       a.role AS assignee_role, a.created_at AS assignee_created_at \
  FROM tickets t \
  JOIN users c ON c.id = t.created_by \
  LEFT JOIN users a ON a.id = t.assigned_to";

pub async fn create(
    pool: &SqlitePool,
    data: &TicketCreate,
    created_by: i64,
) -> RepoResult<Ticket> {
    let id = snowflake_id();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO tickets (id, title, description, status, priority, created_by, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(TicketStatus::Open)
    .bind(data.priority)
    .bind(created_by)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("failed to create ticket".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Ticket>> {
    let ticket = sqlx::query_as::<_, Ticket>(
        "SELECT id, title, description, status, priority, created_by, assigned_to, created_at \
         FROM tickets WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(ticket)
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<TicketDetail>> {
    let mut qb = QueryBuilder::<Sqlite>::new(DETAIL_SELECT);
    qb.push(" WHERE t.id = ").push_bind(id);

    let row: Option<TicketDetailRow> = qb.build_query_as().fetch_optional(pool).await?;
    Ok(row.map(Into::into))
}

/// List tickets visible under `scope`, newest first
///
/// The scope comes from the same policy value the item-level access check
/// uses, so the result set never exceeds what `can_view` would allow
/// ticket by ticket.
pub async fn list(
    pool: &SqlitePool,
    scope: VisibilityScope,
    query: &TicketListQuery,
) -> RepoResult<Vec<TicketDetail>> {
    let mut qb = QueryBuilder::<Sqlite>::new(DETAIL_SELECT);
    qb.push(" WHERE 1 = 1");

    match scope {
        VisibilityScope::All => {}
        VisibilityScope::AssignedTo(id) => {
            qb.push(" AND t.assigned_to = ").push_bind(id);
        }
        VisibilityScope::CreatedBy(id) => {
            qb.push(" AND t.created_by = ").push_bind(id);
        }
    }

    if let Some(status) = query.status {
        qb.push(" AND t.status = ").push_bind(status);
    }
    if let Some(priority) = query.priority {
        qb.push(" AND t.priority = ").push_bind(priority);
    }

    qb.push(" ORDER BY t.created_at DESC LIMIT ")
        .push_bind(query.page_size)
        .push(" OFFSET ")
        .push_bind(query.offset());

    let rows: Vec<TicketDetailRow> = qb.build_query_as().fetch_all(pool).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn assign(pool: &SqlitePool, id: i64, assignee_id: i64) -> RepoResult<()> {
    let result = sqlx::query("UPDATE tickets SET assigned_to = ? WHERE id = ?")
        .bind(assignee_id)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::TicketNotFound,
            format!("ticket {id} not found"),
        ));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Apply a validated status transition
///
/// Runs as a single transaction: the status mutation and the status-log
/// append become visible together or not at all. The UPDATE carries an
/// optimistic guard on the expected current status; a concurrent
/// transition that committed first makes it match zero rows, and the
/// loser surfaces the now-invalid pair instead of silently double
/// advancing.
pub async fn transition_status(
    pool: &SqlitePool,
    ticket: &Ticket,
    new_status: TicketStatus,
    changed_by: i64,
) -> RepoResult<Ticket> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query("UPDATE tickets SET status = ? WHERE id = ? AND status = ?")
        .bind(new_status)
        .bind(ticket.id)
        .bind(ticket.status)
        .execute(&mut *tx)
        .await?;

    if updated.rows_affected() == 0 {
        // Lost the race (or the ticket vanished); report against the
        // stored state, not our stale snapshot.
        let current: Option<TicketStatus> =
            sqlx::query_scalar("SELECT status FROM tickets WHERE id = ?")
                .bind(ticket.id)
                .fetch_optional(&mut *tx)
                .await?;
        tx.rollback().await?;

        return match current {
            Some(current) => Err(RepoError::Business(
                ErrorCode::InvalidStatusTransition,
                format!("invalid status transition: {current} -> {new_status}"),
            )),
            None => Err(RepoError::Business(
                ErrorCode::TicketNotFound,
                format!("ticket {} not found", ticket.id),
            )),
        };
    }

    sqlx::query(
        "INSERT INTO ticket_status_logs (id, ticket_id, old_status, new_status, changed_by, changed_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(ticket.id)
    .bind(ticket.status)
    .bind(new_status)
    .bind(changed_by)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, ticket.id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("ticket {} not found", ticket.id)))
}

/// Status-change audit trail for a ticket, oldest first
pub async fn status_history(
    pool: &SqlitePool,
    ticket_id: i64,
) -> RepoResult<Vec<TicketStatusLog>> {
    let logs = sqlx::query_as::<_, TicketStatusLog>(
        "SELECT id, ticket_id, old_status, new_status, changed_by, changed_at \
         FROM ticket_status_logs WHERE ticket_id = ? ORDER BY changed_at",
    )
    .bind(ticket_id)
    .fetch_all(pool)
    .await?;
    Ok(logs)
}
