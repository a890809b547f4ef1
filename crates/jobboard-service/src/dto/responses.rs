//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jobboard_common::AccessToken;
use jobboard_core::{ApplicationId, ApplicationStatus, JobId, Role, UserId};

// ============================================================================
// Account Responses
// ============================================================================

/// User fields shared by both roles
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub email_verified: bool,
    pub date_joined: DateTime<Utc>,
}

/// Role-specific profile, tagged by role
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ProfileResponse {
    Applicant {
        cv: Option<String>,
        bio: Option<String>,
    },
    Company {
        name: String,
        description: Option<String>,
        website: Option<String>,
    },
}

/// A user together with its profile
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub user: UserResponse,
    pub profile: ProfileResponse,
}

/// Result of a successful sign-up
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub user: UserResponse,
    pub verification_sent: bool,
    pub message: String,
}

impl RegistrationResponse {
    pub fn new(user: UserResponse) -> Self {
        Self {
            user,
            verification_sent: true,
            message: "Check your email to activate your account".to_string(),
        }
    }
}

/// Uniform answer for requests that must not reveal account existence
#[derive(Debug, Clone, Serialize)]
pub struct AcceptedResponse {
    pub message: String,
}

impl AcceptedResponse {
    pub fn verification_requested() -> Self {
        Self {
            message: "If the account exists and is not yet active, a new verification email has been sent"
                .to_string(),
        }
    }
}

// ============================================================================
// Session Responses
// ============================================================================

/// Session credentials returned by login and verification
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountResponse,
}

impl AuthResponse {
    pub fn new(token: AccessToken, account: AccountResponse) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            account,
        }
    }
}

// ============================================================================
// Job Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: JobId,
    pub company_id: UserId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub applied_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
    pub database: String,
}

impl ReadinessResponse {
    /// `database_healthy` is `None` when no database backs the store
    pub fn ready(storage: &str, database_healthy: Option<bool>) -> Self {
        let healthy = database_healthy.unwrap_or(true);
        Self {
            status: if healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: storage.to_string(),
                database: match database_healthy {
                    Some(true) => "healthy",
                    Some(false) => "unhealthy",
                    None => "not_configured",
                }
                .to_string(),
            },
        }
    }
}
