//! Job and application model -> entity mappers

use jobboard_core::entities::{Application, ApplicationStatus, Job};
use jobboard_core::error::DomainError;
use jobboard_core::value_objects::{ApplicationId, JobId, UserId};

use crate::models::{ApplicationModel, JobModel};

impl From<JobModel> for Job {
    fn from(model: JobModel) -> Self {
        Job {
            id: JobId::new(model.id),
            company_id: UserId::new(model.company_id),
            title: model.title,
            description: model.description,
            location: model.location,
            job_type: model.job_type,
            salary: model.salary,
            created_at: model.created_at,
            is_active: model.is_active,
        }
    }
}

impl TryFrom<ApplicationModel> for Application {
    type Error = DomainError;

    fn try_from(model: ApplicationModel) -> Result<Self, Self::Error> {
        let status = ApplicationStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown application status '{}'", model.status))
        })?;

        Ok(Application {
            id: ApplicationId::new(model.id),
            job_id: JobId::new(model.job_id),
            applicant_id: UserId::new(model.applicant_id),
            status,
            applied_at: model.applied_at,
        })
    }
}
