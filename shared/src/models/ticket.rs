//! Ticket Model

use super::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Ticket status, ordered
///
/// Status only ever advances forward by exactly one step along
/// `OPEN -> IN_PROGRESS -> RESOLVED -> CLOSED`; the adjacency rule itself
/// lives in the policy layer, this enum just knows the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Forward progression order; linear, no branches
    pub const FLOW: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Position in the progression order
    pub fn position(&self) -> usize {
        Self::FLOW.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The only status reachable from `self`; `None` for the terminal state
    pub fn next(&self) -> Option<TicketStatus> {
        Self::FLOW.get(self.position() + 1).copied()
    }

    /// Whether this status has no outgoing transition
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket priority, set at creation and immutable thereafter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket row
///
/// `created_by` is set once at creation and never changes. `assigned_to`
/// may be set or reassigned any number of times, but only to a user whose
/// role is MANAGER or SUPPORT.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: i64,
    pub assigned_to: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Ticket response with creator/assignee hydrated into user references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: UserRef,
    pub assigned_to: Option<UserRef>,
    pub created_at: DateTime<Utc>,
}

/// Create ticket payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TicketCreate {
    #[validate(length(min = 5, message = "title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    pub priority: TicketPriority,
}

/// Assign ticket payload
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTicket {
    pub user_id: i64,
}

/// Change ticket status payload
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeTicketStatus {
    pub status: TicketStatus,
}
