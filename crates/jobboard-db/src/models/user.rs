//! User and profile database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub email_verified: bool,
    pub date_joined: DateTime<Utc>,
}

/// Database model for companies table
#[derive(Debug, Clone, FromRow)]
pub struct CompanyModel {
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Database model for applicants table
#[derive(Debug, Clone, FromRow)]
pub struct ApplicantModel {
    pub user_id: i64,
    pub cv: Option<String>,
    pub bio: Option<String>,
}
