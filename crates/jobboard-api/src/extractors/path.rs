//! Path parameter extractors
//!
//! Type-safe extraction of ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use jobboard_core::JobId;

use crate::response::ApiError;

/// `:job_id` parsed as a [`JobId`]
#[derive(Debug, Clone, Copy)]
pub struct JobIdPath(pub JobId);

#[async_trait]
impl<S> FromRequestParts<S> for JobIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse()
            .map(JobIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid job_id format"))
    }
}

/// `:uid/:token` of a verification link
#[derive(Debug, Clone, serde::Deserialize)]
pub struct VerificationPath {
    pub uid: String,
    pub token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for VerificationPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path) = Path::<VerificationPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;
        Ok(path)
    }
}
