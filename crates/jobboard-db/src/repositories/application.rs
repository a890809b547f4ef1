//! PostgreSQL implementation of ApplicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{Application, ApplicationStatus};
use jobboard_core::error::DomainError;
use jobboard_core::traits::{ApplicationRepository, RepoResult};
use jobboard_core::value_objects::{JobId, UserId};

use crate::models::ApplicationModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ApplicationRepository
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    #[instrument(skip(self))]
    async fn exists(&self, job_id: JobId, applicant_id: UserId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"SELECT EXISTS(SELECT 1 FROM applications WHERE job_id = $1 AND applicant_id = $2)",
        )
        .bind(job_id.into_inner())
        .bind(applicant_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, job_id: JobId, applicant_id: UserId) -> RepoResult<Application> {
        let model = sqlx::query_as::<_, ApplicationModel>(
            r"
            INSERT INTO applications (job_id, applicant_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, job_id, applicant_id, status, applied_at
            ",
        )
        .bind(job_id.into_inner())
        .bind(applicant_id.into_inner())
        .bind(ApplicationStatus::default().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyApplied))?;

        Application::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_applicant(&self, applicant_id: UserId) -> RepoResult<Vec<Application>> {
        let rows = sqlx::query_as::<_, ApplicationModel>(
            r"
            SELECT id, job_id, applicant_id, status, applied_at
            FROM applications
            WHERE applicant_id = $1
            ORDER BY applied_at DESC, id DESC
            ",
        )
        .bind(applicant_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Application::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_job(&self, job_id: JobId) -> RepoResult<Vec<Application>> {
        let rows = sqlx::query_as::<_, ApplicationModel>(
            r"
            SELECT id, job_id, applicant_id, status, applied_at
            FROM applications
            WHERE job_id = $1
            ORDER BY applied_at ASC, id ASC
            ",
        )
        .bind(job_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Application::try_from).collect()
    }
}
