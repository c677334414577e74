//! Per-ticket access policy
//!
//! Read access doubles as comment-participation access: an actor who can
//! see a ticket may read and post its comments, and nobody else can.

use crate::auth::CurrentUser;
use crate::policy::scope::scope_for;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Ticket;

/// Whether the actor may read this ticket (and its comments)
pub fn can_view(actor: &CurrentUser, ticket: &Ticket) -> bool {
    scope_for(actor).permits(ticket)
}

/// Deny unless the actor may read this ticket
///
/// Callers must have established that the ticket exists before calling
/// this, so absence is reported as not-found and never as denied.
pub fn ensure_can_view(actor: &CurrentUser, ticket: &Ticket) -> AppResult<()> {
    if can_view(actor, ticket) {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::AccessDenied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{Role, TicketPriority, TicketStatus};

    fn actor(id: i64, role: Role) -> CurrentUser {
        CurrentUser {
            id,
            email: format!("user{id}@example.com"),
            role,
        }
    }

    fn ticket(created_by: i64, assigned_to: Option<i64>) -> Ticket {
        Ticket {
            id: 10,
            title: "Cannot log in".into(),
            description: "Password reset loop".into(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            created_by,
            assigned_to,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_can_view_matches_role_rules() {
        let t = ticket(1, Some(2));

        assert!(can_view(&actor(99, Role::Manager), &t));
        assert!(can_view(&actor(2, Role::Support), &t));
        assert!(!can_view(&actor(3, Role::Support), &t));
        assert!(can_view(&actor(1, Role::User), &t));
        assert!(!can_view(&actor(4, Role::User), &t));
    }

    #[test]
    fn test_ensure_can_view_denies_with_access_denied() {
        let t = ticket(1, None);
        let err = ensure_can_view(&actor(2, Role::User), &t).unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);
        assert_eq!(err.message, "Access denied");
    }
}
