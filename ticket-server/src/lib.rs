//! Ticket Server - ticket tracking service
//!
//! # Architecture Overview
//!
//! Users file tickets, staff triage and resolve them, and participants
//! discuss them via comments. The interesting part is the access-control
//! and lifecycle core in [`policy`]: pure, storage-free rules deciding,
//! per (actor, role, ticket), what may be read, what may be mutated, and
//! in what order status may change. Everything else is plumbing around it.
//!
//! # Module Structure
//!
//! ```text
//! ticket-server/src/
//! ├── core/          # Configuration, state, server, errors
//! ├── auth/          # JWT authentication, current-user context
//! ├── policy/        # Access control, lifecycle, visibility scope
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # Logging, payload validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod policy;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Audit logging macro - structured events on the `audit` tracing target.
///
/// Mutations of tickets, comments and users go through this so operators
/// can filter the audit stream independently of application logs.
#[macro_export]
macro_rules! audit_log {
    ($action:expr, $resource:expr, $id:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = $resource,
            resource_id = $id,
            $($key = $value),*
        );
    };
}

/// Security logging macro - structured events on the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and initialize logging
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _____ _      _        _     ____
|_   _(_) ___| | _____| |_  / ___|  ___ _ ____   _____ _ __
  | | | |/ __| |/ / _ \ __| \___ \ / _ \ '__\ \ / / _ \ '__|
  | | | | (__|   <  __/ |_   ___) |  __/ |   \ V /  __/ |
  |_| |_|\___|_|\_\___|\__| |____/ \___|_|    \_/ \___|_|
    "#
    );
}
