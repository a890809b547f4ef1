//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::Role;
use crate::value_objects::{JobId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Job not found: {0}")]
    JobNotFound(JobId),

    #[error("Profile missing for user {0}")]
    ProfileNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("This action requires the {0} role")]
    RoleRequired(Role),

    #[error("Not the owner of this job")]
    NotJobOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A user with that username already exists")]
    UsernameTaken,

    #[error("You have already applied for this job")]
    AlreadyApplied,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("This job is no longer accepting applications")]
    JobClosed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Mail delivery error: {0}")]
    MailError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::JobNotFound(_) => "UNKNOWN_JOB",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",

            // Authorization
            Self::RoleRequired(_) => "ROLE_REQUIRED",
            Self::NotJobOwner => "NOT_JOB_OWNER",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::AlreadyApplied => "ALREADY_APPLIED",

            // Business Rules
            Self::JobClosed => "JOB_CLOSED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::MailError(_) => "MAIL_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Input field the error should be reported against, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::UsernameTaken | Self::InvalidUsername(_) => Some("username"),
            Self::WeakPassword(_) => Some("password"),
            Self::PasswordMismatch => Some("confirm_password"),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::JobNotFound(_) | Self::ProfileNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::PasswordMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::RoleRequired(_) | Self::NotJobOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken | Self::AlreadyApplied)
    }
}
