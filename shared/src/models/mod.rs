//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, snowflake-generated).

pub mod comment;
pub mod role;
pub mod status_log;
pub mod ticket;
pub mod user;

// Re-exports
pub use comment::*;
pub use role::*;
pub use status_log::*;
pub use ticket::*;
pub use user::*;
