//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use jobboard_core::entities::{Account, Application, Job, User};

use super::responses::{
    AccountResponse, ApplicationResponse, JobResponse, ProfileResponse, UserResponse,
};

// ============================================================================
// Account Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            is_active: user.is_active,
            email_verified: user.email_verified,
            date_joined: user.date_joined,
        }
    }
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        let profile = match account {
            Account::Applicant(a) => ProfileResponse::Applicant {
                cv: a.profile.cv.clone(),
                bio: a.profile.bio.clone(),
            },
            Account::Company(c) => ProfileResponse::Company {
                name: c.profile.name.clone(),
                description: c.profile.description.clone(),
                website: c.profile.website.clone(),
            },
        };

        Self {
            user: UserResponse::from(account.user()),
            profile,
        }
    }
}

// ============================================================================
// Job Mappers
// ============================================================================

impl From<&Job> for JobResponse {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary.clone(),
            created_at: job.created_at,
            is_active: job.is_active,
        }
    }
}

impl From<&Application> for ApplicationResponse {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            status: application.status,
            status_label: application.status.label(),
            applied_at: application.applied_at,
        }
    }
}
