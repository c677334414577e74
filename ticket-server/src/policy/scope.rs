//! Ticket visibility scope
//!
//! The single source of truth for "which tickets can this actor see".
//! Item-level access checks ([`super::access`]) and the list query
//! builder both consult the same [`VisibilityScope`] value, so a bulk
//! read can never return a ticket the item-level check would deny.

use crate::auth::CurrentUser;
use shared::models::{Role, Ticket};

/// The set of tickets an actor may see, derived from role alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityScope {
    /// Managers see every ticket
    All,
    /// Support staff see tickets assigned to them
    AssignedTo(i64),
    /// Regular users see tickets they created
    CreatedBy(i64),
}

/// Visibility scope for an actor
pub fn scope_for(actor: &CurrentUser) -> VisibilityScope {
    match actor.role {
        Role::Manager => VisibilityScope::All,
        Role::Support => VisibilityScope::AssignedTo(actor.id),
        Role::User => VisibilityScope::CreatedBy(actor.id),
    }
}

impl VisibilityScope {
    /// Whether a single ticket falls inside this scope
    pub fn permits(&self, ticket: &Ticket) -> bool {
        match *self {
            VisibilityScope::All => true,
            VisibilityScope::AssignedTo(id) => ticket.assigned_to == Some(id),
            VisibilityScope::CreatedBy(id) => ticket.created_by == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{TicketPriority, TicketStatus};

    fn actor(id: i64, role: Role) -> CurrentUser {
        CurrentUser {
            id,
            email: format!("user{id}@example.com"),
            role,
        }
    }

    fn ticket(created_by: i64, assigned_to: Option<i64>) -> Ticket {
        Ticket {
            id: 1,
            title: "Printer on fire".into(),
            description: "It is actually on fire".into(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            created_by,
            assigned_to,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_manager_scope_is_unrestricted() {
        let scope = scope_for(&actor(1, Role::Manager));
        assert_eq!(scope, VisibilityScope::All);
        assert!(scope.permits(&ticket(99, None)));
        assert!(scope.permits(&ticket(99, Some(42))));
    }

    #[test]
    fn test_support_scope_is_assigned_only() {
        let scope = scope_for(&actor(5, Role::Support));
        assert_eq!(scope, VisibilityScope::AssignedTo(5));
        assert!(scope.permits(&ticket(99, Some(5))));
        assert!(!scope.permits(&ticket(99, Some(6))));
        assert!(!scope.permits(&ticket(99, None)));
        // Creating a ticket does not put it in a support actor's scope
        assert!(!scope.permits(&ticket(5, None)));
    }

    #[test]
    fn test_user_scope_is_own_tickets_only() {
        let scope = scope_for(&actor(7, Role::User));
        assert_eq!(scope, VisibilityScope::CreatedBy(7));
        assert!(scope.permits(&ticket(7, None)));
        assert!(!scope.permits(&ticket(8, None)));
        // Being the assignee never happens for USER role, but even if data
        // drifted, assignment does not grant creator-scope visibility
        assert!(!scope.permits(&ticket(8, Some(7))));
    }
}
