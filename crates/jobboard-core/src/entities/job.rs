//! Job entity - a posting owned by a company account

use chrono::{DateTime, Utc};

use crate::value_objects::{JobId, UserId};

/// Employment type used when a posting does not specify one
pub const DEFAULT_JOB_TYPE: &str = "Full-Time";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    /// User id of the owning company account
    pub company_id: UserId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Job {
    #[inline]
    pub fn is_owned_by(&self, company_id: UserId) -> bool {
        self.company_id == company_id
    }
}

/// Fields supplied when posting a job; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub company_id: UserId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub is_active: bool,
}

impl NewJob {
    /// An active posting with the default job type
    pub fn new(company_id: UserId, title: String, description: String, location: String) -> Self {
        Self {
            company_id,
            title,
            description,
            location,
            job_type: DEFAULT_JOB_TYPE.to_string(),
            salary: None,
            is_active: true,
        }
    }
}
