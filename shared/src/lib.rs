//! Shared types for the ticket service
//!
//! Common types used across crates: the unified error system, data models
//! for users, tickets and comments, and ID/time utilities.
//!
//! Database row types derive `sqlx::FromRow` behind the `db` feature so
//! that API clients can depend on this crate without pulling in sqlx.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
