//! Email verification service

use tracing::{info, instrument, warn};

use jobboard_common::auth::decode_uid;
use jobboard_common::AppError;
use jobboard_core::DomainError;

use crate::dto::AuthResponse;

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Activate the account named by `uid` and open a session for it.
    ///
    /// Malformed ids, unknown users and bad or expired tokens all fail with
    /// the same `INVALID_VERIFICATION_LINK` error.
    #[instrument(skip(self, token))]
    pub async fn verify(&self, uid: &str, token: &str) -> ServiceResult<AuthResponse> {
        let user_id = decode_uid(uid).map_err(|e| {
            warn!("Verification failed: malformed uid");
            ServiceError::from(e)
        })?;

        let repo = self.ctx.account_repo();
        let user = repo.find_user_by_id(user_id).await?;
        let hash = repo.get_password_hash(user_id).await?;

        let (Some(user), Some(hash)) = (user, hash) else {
            warn!(user_id = %user_id, "Verification failed: unknown user");
            return Err(AppError::InvalidVerificationLink.into());
        };

        self.ctx
            .verification_tokens()
            .verify(token, &user, &hash)
            .map_err(|e| {
                warn!(user_id = %user_id, "Verification failed: token rejected");
                ServiceError::from(e)
            })?;

        repo.mark_verified(user_id).await?;
        info!(user_id = %user_id, "Account verified");

        let account = repo
            .find_account(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(user_id))?;

        AuthService::new(self.ctx).open_session(&account).await
    }
}
