//! Job handlers

use axum::{extract::State, Json};
use jobboard_service::dto::{ApplicationResponse, CreateJobRequest, JobResponse};
use jobboard_service::{ApplicationService, JobService};

use crate::extractors::{AuthUser, JobIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /jobs
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<JobResponse>>> {
    let jobs = JobService::new(state.service_context()).list_active().await?;
    Ok(Json(jobs))
}

/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> ApiResult<Created<Json<JobResponse>>> {
    let job = JobService::new(state.service_context())
        .create_job(&auth, request)
        .await?;
    Ok(Created(Json(job)))
}

/// GET /jobs/:job_id
pub async fn get_job(
    State(state): State<AppState>,
    JobIdPath(job_id): JobIdPath,
) -> ApiResult<Json<JobResponse>> {
    let job = JobService::new(state.service_context()).get_job(job_id).await?;
    Ok(Json(job))
}

/// POST /jobs/:job_id/apply
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    JobIdPath(job_id): JobIdPath,
) -> ApiResult<Created<Json<ApplicationResponse>>> {
    let application = ApplicationService::new(state.service_context())
        .apply(&auth, job_id)
        .await?;
    Ok(Created(Json(application)))
}

/// Applications received for a job, owner only
///
/// GET /jobs/:job_id/applications
pub async fn job_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    JobIdPath(job_id): JobIdPath,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let applications = JobService::new(state.service_context())
        .list_applications(&auth, job_id)
        .await?;
    Ok(Json(applications))
}
