//! Authentication extractor
//!
//! Resolves the bearer token of a request into the caller's session.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jobboard_service::{AuthService, SessionContext};

use crate::response::ApiError;
use crate::state::AppState;

/// Session of the authenticated caller.
///
/// Rejects requests without a bearer token, with a token that does not
/// verify, or whose session was revoked or has expired.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionContext);

impl std::ops::Deref for AuthUser {
    type Target = SessionContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let session = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await?;

        Ok(AuthUser(session))
    }
}
