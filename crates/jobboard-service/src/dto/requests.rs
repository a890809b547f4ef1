//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use jobboard_core::{validate_username, ApplicantProfileUpdate, CompanyProfileUpdate};

fn username_chars(value: &str) -> Result<(), ValidationError> {
    validate_username(value).map_err(|msg| {
        let mut err = ValidationError::new("username");
        err.message = Some(Cow::Owned(msg));
        err
    })
}

// ============================================================================
// Registration Requests
// ============================================================================

/// Applicant sign-up form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterApplicantRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        custom(function = "username_chars")
    )]
    pub username: String,

    #[validate(
        email(message = "Enter a valid email address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: String,

    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Company sign-up form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterCompanyRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        custom(function = "username_chars")
    )]
    pub username: String,

    #[validate(
        email(message = "Enter a valid email address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Company name must be 1-255 characters"))]
    pub company_name: String,

    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Ask for a fresh verification email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResendVerificationRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,
}

// ============================================================================
// Session Requests
// ============================================================================

/// Username/password login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Job Requests
// ============================================================================

/// Post a new job
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    /// Defaults to "Full-Time"
    #[validate(length(min = 1, max = 50, message = "Job type must be 1-50 characters"))]
    pub job_type: Option<String>,

    #[validate(length(max = 100, message = "Salary must be at most 100 characters"))]
    pub salary: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Partial profile update.
///
/// Company accounts may send `name`, `description` and `website`;
/// applicant accounts `cv` and `bio`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255, message = "Company name must be 1-255 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(
        url(message = "Enter a valid URL"),
        length(max = 200, message = "Website must be at most 200 characters")
    )]
    pub website: Option<String>,

    #[validate(length(min = 1, max = 255, message = "CV reference must be 1-255 characters"))]
    pub cv: Option<String>,

    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    /// Names of the applicant-only fields that are set
    pub fn applicant_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.cv.is_some() {
            fields.push("cv");
        }
        if self.bio.is_some() {
            fields.push("bio");
        }
        fields
    }

    /// Names of the company-only fields that are set
    pub fn company_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.website.is_some() {
            fields.push("website");
        }
        fields
    }

    pub fn into_company_update(self) -> CompanyProfileUpdate {
        CompanyProfileUpdate {
            name: self.name,
            description: self.description,
            website: self.website,
        }
    }

    pub fn into_applicant_update(self) -> ApplicantProfileUpdate {
        ApplicantProfileUpdate {
            cv: self.cv,
            bio: self.bio,
        }
    }
}
