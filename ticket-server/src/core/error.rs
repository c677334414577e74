//! Server-level errors
//!
//! Request-level failures use [`shared::AppError`]; this type covers
//! startup and shutdown faults that never reach a client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("startup error: {0}")]
    Startup(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
