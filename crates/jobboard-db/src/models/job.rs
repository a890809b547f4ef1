//! Job and application database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for jobs table
#[derive(Debug, Clone, FromRow)]
pub struct JobModel {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Database model for applications table
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationModel {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}
