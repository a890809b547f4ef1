//! PostgreSQL connection pool management

use jobboard_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::path::Path;
use std::time::Duration;

/// Pool timeouts not exposed through configuration
#[derive(Debug, Clone, Copy)]
pub struct PoolTimeouts {
    /// Maximum time to wait for a connection
    pub acquire: Duration,
    /// Maximum idle time before a connection is closed
    pub idle: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for PoolTimeouts {
    fn default() -> Self {
        Self {
            acquire: Duration::from_secs(10),
            idle: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_timeouts(config, PoolTimeouts::default()).await
}

pub async fn create_pool_with_timeouts(
    config: &DatabaseConfig,
    timeouts: PoolTimeouts,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(timeouts.acquire)
        .idle_timeout(timeouts.idle)
        .max_lifetime(timeouts.max_lifetime)
        .connect(&config.url)
        .await
}

/// Directory holding the SQL migrations of this crate
pub fn migrations_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
}

/// Apply all pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(migrations_dir()).await?;
    migrator.run(pool).await
}
