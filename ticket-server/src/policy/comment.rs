//! Comment edit/delete rule
//!
//! Reading and posting comments follow the parent ticket's visibility
//! ([`super::access`]). Editing and deleting an existing comment use a
//! different rule: the author, or a manager, and nobody else. Note the
//! asymmetry with ticket access: a support actor assigned to the ticket
//! can read and post comments there but cannot touch another user's
//! comment.

use crate::auth::CurrentUser;
use crate::policy::capability::can_moderate_comments;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Comment;

/// Whether the actor may edit or delete this comment
pub fn can_modify_comment(actor: &CurrentUser, comment: &Comment) -> bool {
    can_moderate_comments(actor.role) || comment.user_id == actor.id
}

/// Deny unless the actor is the author or a manager
///
/// Evaluated only after the comment has been loaded, so absence is
/// reported as not-found by the caller, never as denial.
pub fn ensure_can_modify(actor: &CurrentUser, comment: &Comment) -> AppResult<()> {
    if can_modify_comment(actor, comment) {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::NotCommentAuthor))
    }
}
