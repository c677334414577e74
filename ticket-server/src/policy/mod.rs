//! Access-control and lifecycle rules
//!
//! Pure, storage-free decision logic. Handlers and repositories consult
//! this module; it never touches the database itself, so every rule is
//! unit-testable in isolation.
//!
//! # Module Structure
//!
//! - [`capability`] - role -> ticket-action table
//! - [`scope`] - per-role ticket visibility, shared by item access and list queries
//! - [`access`] - per-ticket read checks
//! - [`lifecycle`] - forward-only status machine
//! - [`assignment`] - assignee eligibility
//! - [`comment`] - comment edit/delete rule
//! - [`query`] - list-query normalization
//!
//! Existence is always established before any of these rules run: a
//! missing ticket or comment is reported as not-found, never as denied.

pub mod access;
pub mod assignment;
pub mod capability;
pub mod comment;
pub mod lifecycle;
pub mod query;
pub mod scope;

pub use access::{can_view, ensure_can_view};
pub use assignment::{ensure_assignable, role_is_assignable};
pub use capability::{TicketAction, can_moderate_comments, role_can};
pub use comment::{can_modify_comment, ensure_can_modify};
pub use lifecycle::validate_transition;
pub use query::{TicketListParams, TicketListQuery};
pub use scope::{VisibilityScope, scope_for};
