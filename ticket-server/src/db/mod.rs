//! Database Module
//!
//! SQLite connection pool, embedded migrations and first-run bootstrap.

pub mod repository;

use crate::auth::hash_password;
use crate::core::Config;
use shared::error::AppError;
use shared::models::{Role, UserCreate};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Embedded migrations, also used by the integration tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Database service - owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Create a new database service with WAL mode
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        // Build connection options: WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: wait up to 5s on write contention instead of failing
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// In-memory database for tests
    ///
    /// Pinned to a single connection: each `:memory:` connection is its
    /// own database, so a larger pool would see different schemas.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::database(format!("Invalid connection string: {e}")))?
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;

        Ok(Self { pool })
    }

    /// Seed a manager account on first run so the API is reachable
    pub async fn bootstrap_admin(&self, config: &Config) -> Result<(), AppError> {
        if repository::user::count(&self.pool).await? > 0 {
            return Ok(());
        }

        let data = UserCreate {
            name: "Administrator".to_string(),
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
            role: Role::Manager,
        };
        let password_hash = hash_password(&data.password)?;
        let user = repository::user::create(&self.pool, &data, &password_hash).await?;

        tracing::info!(email = %user.email, "Seeded initial manager account");
        if config.is_production() {
            tracing::warn!("Change the bootstrap manager password (ADMIN_PASSWORD)");
        }

        Ok(())
    }
}
