//! Ticket Status Log Model

use super::ticket::TicketStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit record of a status transition
///
/// Created exactly once per successful transition, in the same
/// transaction as the ticket's status mutation. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TicketStatusLog {
    pub id: i64,
    pub ticket_id: i64,
    pub old_status: TicketStatus,
    pub new_status: TicketStatus,
    pub changed_by: i64,
    pub changed_at: DateTime<Utc>,
}
