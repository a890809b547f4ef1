//! Application service - applicants applying for jobs

use tracing::{info, instrument, warn};

use jobboard_core::entities::Role;
use jobboard_core::{DomainError, JobId};

use crate::dto::ApplicationResponse;

use super::auth::SessionContext;
use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ApplicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApplicationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply the caller to a job.
    ///
    /// Checks run in order: applicant role, job exists, job open, not yet
    /// applied. The role check comes first so nothing is read or written on
    /// behalf of a company account.
    #[instrument(skip(self, session), fields(applicant_id = %session.user_id))]
    pub async fn apply(
        &self,
        session: &SessionContext,
        job_id: JobId,
    ) -> ServiceResult<ApplicationResponse> {
        session.require_role(Role::Applicant)?;

        let job = self
            .ctx
            .job_repo()
            .find_by_id(job_id)
            .await?
            .ok_or(DomainError::JobNotFound(job_id))?;

        if !job.is_active {
            return Err(DomainError::JobClosed.into());
        }

        let applications = self.ctx.application_repo();
        if applications.exists(job_id, session.user_id).await? {
            warn!("Duplicate application rejected");
            return Err(DomainError::AlreadyApplied.into());
        }

        let application = applications.create(job_id, session.user_id).await?;
        info!(application_id = %application.id, "Application submitted");

        Ok(ApplicationResponse::from(&application))
    }

    /// The caller's applications, newest first
    #[instrument(skip(self, session), fields(applicant_id = %session.user_id))]
    pub async fn my_applications(
        &self,
        session: &SessionContext,
    ) -> ServiceResult<Vec<ApplicationResponse>> {
        session.require_role(Role::Applicant)?;

        let applications = self
            .ctx
            .application_repo()
            .find_by_applicant(session.user_id)
            .await?;
        Ok(applications.iter().map(ApplicationResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;
    use crate::services::JobService;
    use jobboard_core::ApplicationStatus;

    #[tokio::test]
    async fn test_apply_once() {
        let t = TestContext::new();
        let acme = t.company_session("acme", "Acme").await;
        let bob = t.applicant_session("bob").await;
        let job = JobService::new(&t.ctx)
            .create_job(&acme, TestContext::job_request("Rust Engineer"))
            .await
            .unwrap();
        let service = ApplicationService::new(&t.ctx);

        let application = service.apply(&bob, job.id).await.unwrap();
        assert_eq!(application.status, ApplicationStatus::Applied);
        assert_eq!(application.job_id, job.id);

        let err = service.apply(&bob, job.id).await.unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_APPLIED");
        assert_eq!(err.status_code(), 409);
        assert_eq!(t.store.application_count(), 1);
    }

    #[tokio::test]
    async fn test_company_never_creates_application() {
        let t = TestContext::new();
        let acme = t.company_session("acme", "Acme").await;
        let job = JobService::new(&t.ctx)
            .create_job(&acme, TestContext::job_request("Rust Engineer"))
            .await
            .unwrap();
        let service = ApplicationService::new(&t.ctx);

        for job_id in [job.id, JobId::new(9999)] {
            let err = service.apply(&acme, job_id).await.unwrap_err();
            assert_eq!(err.error_code(), "ROLE_REQUIRED");
        }
        assert_eq!(t.store.application_count(), 0);
    }

    #[tokio::test]
    async fn test_apply_unknown_job() {
        let t = TestContext::new();
        let bob = t.applicant_session("bob").await;

        let err = ApplicationService::new(&t.ctx)
            .apply(&bob, JobId::new(42))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_JOB");
    }

    #[tokio::test]
    async fn test_apply_closed_job() {
        let t = TestContext::new();
        let acme = t.company_session("acme", "Acme").await;
        let bob = t.applicant_session("bob").await;
        let job = JobService::new(&t.ctx)
            .create_job(&acme, TestContext::job_request("Rust Engineer"))
            .await
            .unwrap();
        t.store.set_job_active(job.id, false).unwrap();

        let err = ApplicationService::new(&t.ctx)
            .apply(&bob, job.id)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "JOB_CLOSED");
        assert_eq!(t.store.application_count(), 0);
    }

    #[tokio::test]
    async fn test_my_applications_newest_first() {
        let t = TestContext::new();
        let acme = t.company_session("acme", "Acme").await;
        let bob = t.applicant_session("bob").await;
        let jobs = JobService::new(&t.ctx);
        let first = jobs
            .create_job(&acme, TestContext::job_request("First"))
            .await
            .unwrap();
        let second = jobs
            .create_job(&acme, TestContext::job_request("Second"))
            .await
            .unwrap();

        let service = ApplicationService::new(&t.ctx);
        service.apply(&bob, first.id).await.unwrap();
        service.apply(&bob, second.id).await.unwrap();

        let mine: Vec<JobId> = service
            .my_applications(&bob)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.job_id)
            .collect();
        assert_eq!(mine, vec![second.id, first.id]);
    }
}
