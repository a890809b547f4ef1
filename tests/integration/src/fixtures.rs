//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};

pub const TEST_PASSWORD: &str = "TestPass123";

/// Username that will not collide with earlier runs against a shared database
pub fn unique_username(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &id[..12])
}

/// Applicant sign-up form
#[derive(Debug, Serialize)]
pub struct RegisterApplicantRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterApplicantRequest {
    pub fn unique(prefix: &str) -> Self {
        let username = unique_username(prefix);
        Self {
            email: format!("{username}@example.com"),
            username,
            first_name: "Test".to_string(),
            last_name: "Applicant".to_string(),
            password: TEST_PASSWORD.to_string(),
            confirm_password: TEST_PASSWORD.to_string(),
        }
    }
}

/// Company sign-up form
#[derive(Debug, Serialize)]
pub struct RegisterCompanyRequest {
    pub username: String,
    pub email: String,
    pub company_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterCompanyRequest {
    pub fn unique(prefix: &str, company_name: &str) -> Self {
        let username = unique_username(prefix);
        Self {
            email: format!("{username}@example.com"),
            username,
            company_name: company_name.to_string(),
            password: TEST_PASSWORD.to_string(),
            confirm_password: TEST_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

impl CreateJobRequest {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: "Help us build things".to_string(),
            location: "Remote".to_string(),
            job_type: None,
            salary: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub email_verified: bool,
}

#[derive(Debug, Deserialize)]
pub struct RegistrationResponse {
    pub user: UserResponse,
    pub verification_sent: bool,
}

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub user: UserResponse,
    pub profile: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub account: AccountResponse,
}

#[derive(Debug, Deserialize)]
pub struct JobResponse {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub job_type: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}
