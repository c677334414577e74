use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use shared::error::AppResult;

/// Server state - shared handles for all services
///
/// Cloning is cheap: the pool is internally reference-counted and the JWT
/// service sits behind an `Arc`.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | pool | SqlitePool | SQLite connection pool |
/// | jwt_service | Arc<JwtService> | JWT token service |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Create server state from already-initialized parts
    ///
    /// Usually [`ServerState::initialize`] is what you want.
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Initialize server state
    ///
    /// In order:
    /// 1. Working directory structure (created if missing)
    /// 2. Database (pool, migrations)
    /// 3. Bootstrap manager account (first run only)
    /// 4. JWT service
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_data_dir()
            .map_err(|e| shared::AppError::internal(format!("Failed to create data dir: {e}")))?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy()).await?;
        db.bootstrap_admin(config).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db.pool, jwt_service))
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
