//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use jobboard_core::entities::Session;
use jobboard_core::traits::{RepoResult, SessionRepository};

use crate::models::SessionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    async fn create(&self, session: &Session) -> RepoResult<()> {
        let pruned = sqlx::query(
            r"
            DELETE FROM sessions
            WHERE revoked_at IS NOT NULL OR expires_at <= NOW()
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?
        .rows_affected();
        if pruned > 0 {
            debug!(pruned, "Removed dead sessions");
        }

        sqlx::query(
            r"
            INSERT INTO sessions (id, user_id, role, created_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&session.id)
        .bind(session.user_id.into_inner())
        .bind(session.role.as_str())
        .bind(session.created_at)
        .bind(session.expires_at)
        .bind(session.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: &str) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT id, user_id, role, created_at, expires_at, revoked_at
            FROM sessions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Session::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn revoke(&self, id: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE sessions
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
