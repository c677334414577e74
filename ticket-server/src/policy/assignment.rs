//! Assignee eligibility
//!
//! Tickets may only be assigned to staff (MANAGER or SUPPORT). There is
//! no self-assignment restriction: a support user may be assigned to a
//! ticket they already handle.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Role, User};

/// Whether a role can hold ticket assignments
pub const fn role_is_assignable(role: Role) -> bool {
    matches!(role, Role::Manager | Role::Support)
}

/// Reject assignment candidates holding the USER role
///
/// Candidate existence (not-found) is the caller's concern; this only
/// judges the role.
pub fn ensure_assignable(candidate: &User) -> AppResult<()> {
    if role_is_assignable(candidate.role) {
        Ok(())
    } else {
        Err(
            AppError::with_message(ErrorCode::AssigneeIneligible, "cannot assign ticket")
                .with_detail("user_id", candidate.id)
                .with_detail("role", candidate.role.as_str()),
        )
    }
}
