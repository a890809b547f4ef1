//! Job service
//!
//! Job listing and detail are public; posting and reviewing applications
//! belong to company accounts.

use tracing::{info, instrument};
use validator::Validate;

use jobboard_core::entities::{Job, NewJob, Role};
use jobboard_core::{DomainError, JobId};

use crate::dto::{ApplicationResponse, CreateJobRequest, JobResponse};

use super::auth::SessionContext;
use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct JobService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> JobService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active jobs, newest first
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<JobResponse>> {
        let jobs = self.ctx.job_repo().list_active().await?;
        Ok(jobs.iter().map(JobResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_job(&self, job_id: JobId) -> ServiceResult<JobResponse> {
        let job = self.load(job_id).await?;
        Ok(JobResponse::from(&job))
    }

    #[instrument(skip(self, session, request), fields(company_id = %session.user_id))]
    pub async fn create_job(
        &self,
        session: &SessionContext,
        request: CreateJobRequest,
    ) -> ServiceResult<JobResponse> {
        session.require_role(Role::Company)?;
        request.validate()?;

        let mut job = NewJob::new(
            session.user_id,
            request.title,
            request.description,
            request.location,
        );
        if let Some(job_type) = request.job_type {
            job.job_type = job_type;
        }
        job.salary = request.salary;

        let job = self.ctx.job_repo().create(&job).await?;
        info!(job_id = %job.id, "Job posted");

        Ok(JobResponse::from(&job))
    }

    /// Applications received for a job, visible to the company that posted it
    #[instrument(skip(self, session), fields(company_id = %session.user_id))]
    pub async fn list_applications(
        &self,
        session: &SessionContext,
        job_id: JobId,
    ) -> ServiceResult<Vec<ApplicationResponse>> {
        session.require_role(Role::Company)?;

        let job = self.load(job_id).await?;
        if !job.is_owned_by(session.user_id) {
            return Err(DomainError::NotJobOwner.into());
        }

        let applications = self.ctx.application_repo().find_by_job(job_id).await?;
        Ok(applications.iter().map(ApplicationResponse::from).collect())
    }

    async fn load(&self, job_id: JobId) -> ServiceResult<Job> {
        Ok(self
            .ctx
            .job_repo()
            .find_by_id(job_id)
            .await?
            .ok_or(DomainError::JobNotFound(job_id))?)
    }
}
