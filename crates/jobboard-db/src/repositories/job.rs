//! PostgreSQL implementation of JobRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{Job, NewJob};
use jobboard_core::traits::{JobRepository, RepoResult};
use jobboard_core::value_objects::JobId;

use crate::models::JobModel;

use super::error::map_db_error;

/// PostgreSQL implementation of JobRepository
#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new PgJobRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: JobId) -> RepoResult<Option<Job>> {
        let result = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, job_type, salary,
                   created_at, is_active
            FROM jobs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Job::from))
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Job>> {
        let result = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, job_type, salary,
                   created_at, is_active
            FROM jobs
            WHERE is_active
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Job::from).collect())
    }

    #[instrument(skip(self, job), fields(company_id = %job.company_id))]
    async fn create(&self, job: &NewJob) -> RepoResult<Job> {
        let model = sqlx::query_as::<_, JobModel>(
            r"
            INSERT INTO jobs (company_id, title, description, location, job_type, salary, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, company_id, title, description, location, job_type, salary,
                      created_at, is_active
            ",
        )
        .bind(job.company_id.into_inner())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.job_type)
        .bind(&job.salary)
        .bind(job.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Job::from(model))
    }
}
