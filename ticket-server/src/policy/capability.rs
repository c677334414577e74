//! Role capability table
//!
//! Global, ownership-independent capabilities. Whether a particular
//! ticket is visible to an actor is a separate question answered by
//! [`super::scope`].

use shared::models::Role;

/// Ticket-level actions subject to role gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    Create,
    List,
    Assign,
    ChangeStatus,
    Delete,
}

/// Whether `role` may perform `action` on tickets at all
///
/// The table is closed over three roles and five actions, so a plain
/// match doubles as the documentation:
///
/// | Role | Create | List | Assign | ChangeStatus | Delete |
/// |---------|--------|------|--------|--------------|--------|
/// | MANAGER | yes | yes | yes | yes | yes |
/// | SUPPORT | no | yes | yes | yes | no |
/// | USER | yes | yes | no | no | no |
pub const fn role_can(role: Role, action: TicketAction) -> bool {
    use TicketAction::*;
    match (role, action) {
        (Role::Manager, _) => true,
        (Role::Support, List | Assign | ChangeStatus) => true,
        (Role::Support, Create | Delete) => false,
        (Role::User, Create | List) => true,
        (Role::User, Assign | ChangeStatus | Delete) => false,
    }
}

/// Whether `role` may edit or delete comments written by other users
///
/// Everyone may edit and delete their own comments; only managers may
/// moderate someone else's.
pub const fn can_moderate_comments(role: Role) -> bool {
    matches!(role, Role::Manager)
}
