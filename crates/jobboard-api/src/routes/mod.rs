//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, health, jobs, registration, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(registration_routes())
        .merge(session_routes())
        .merge(job_routes())
        .merge(user_routes())
}

/// Sign-up and email verification
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/register/applicant", post(registration::register_applicant))
        .route("/register/company", post(registration::register_company))
        .route("/register/resend", post(registration::resend_verification))
        .route("/verify/:uid/:token", get(registration::verify))
}

fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout).post(auth::logout))
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/jobs/:job_id", get(jobs::get_job))
        .route("/jobs/:job_id/apply", post(jobs::apply))
        .route("/jobs/:job_id/applications", get(jobs::job_applications))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_account))
        .route("/users/@me/profile", patch(users::update_profile))
        .route("/users/@me/applications", get(users::my_applications))
}
