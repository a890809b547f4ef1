//! # jobboard-db
//!
//! Storage layer implementing the repository traits of `jobboard-core`.
//!
//! ## Overview
//!
//! - PostgreSQL connection pool management and SQL migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - PostgreSQL repository implementations
//! - [`MemoryStore`], an in-process implementation with identical uniqueness rules
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jobboard_db::{create_pool, run_migrations, PgAccountRepository};
//!
//! async fn example(config: &jobboard_common::DatabaseConfig) -> anyhow::Result<()> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let accounts = PgAccountRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgAccountRepository, PgApplicationRepository, PgJobRepository, PgSessionRepository,
};
