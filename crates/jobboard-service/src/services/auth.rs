//! Authentication service
//!
//! Handles login, logout and resolving bearer tokens into a [`SessionContext`].

use chrono::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use jobboard_common::auth::{verify_dummy_password, verify_password};
use jobboard_common::AppError;
use jobboard_core::entities::{Account, Role, Session};
use jobboard_core::{DomainError, UserId};

use crate::dto::{AccountResponse, AuthResponse, LoginRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity of the caller behind an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: UserId,
    pub role: Role,
    pub session_id: String,
}

impl SessionContext {
    /// Fail with `ROLE_REQUIRED` unless the caller holds `role`
    pub fn require_role(&self, role: Role) -> Result<(), DomainError> {
        if self.role == role {
            Ok(())
        } else {
            Err(DomainError::RoleRequired(role))
        }
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .account_repo()
            .find_user_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                verify_dummy_password(&request.password);
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .account_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                verify_dummy_password(&request.password);
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login failed: account not activated");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let account = self
            .ctx
            .account_repo()
            .find_account(user.id)
            .await?
            .ok_or(DomainError::ProfileNotFound(user.id))?;

        let response = self.open_session(&account).await?;
        info!(user_id = %user.id, role = %account.role(), "User logged in successfully");
        Ok(response)
    }

    /// Create a session for the account and issue its access token
    pub(crate) async fn open_session(&self, account: &Account) -> ServiceResult<AuthResponse> {
        let jwt = self.ctx.jwt_service();
        let session = Session::new(
            Uuid::new_v4().to_string(),
            account.id(),
            account.role(),
            Duration::seconds(jwt.session_ttl()),
        );
        self.ctx.session_repo().create(&session).await?;

        let token = jwt.issue(account.id(), account.role(), &session.id)?;

        Ok(AuthResponse::new(token, AccountResponse::from(account)))
    }

    /// Revoke the caller's session
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn logout(&self, session: &SessionContext) -> ServiceResult<()> {
        self.ctx.session_repo().revoke(&session.session_id).await?;
        info!("User logged out");
        Ok(())
    }

    /// Resolve a bearer token into the session it was issued for.
    ///
    /// The token must verify and its session must be neither revoked nor
    /// expired.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<SessionContext> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let user_id = claims.user_id()?;

        let session = self
            .ctx
            .session_repo()
            .find(&claims.sid)
            .await?
            .filter(|s| s.user_id == user_id && s.is_live())
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Rejected token for dead session");
                ServiceError::App(AppError::InvalidSession)
            })?;

        Ok(SessionContext {
            user_id: session.user_id,
            role: session.role,
            session_id: session.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;

    #[tokio::test]
    async fn test_login_after_verification() {
        let t = TestContext::new();
        t.verified_applicant("bob").await;

        let response = AuthService::new(&t.ctx)
            .login(LoginRequest {
                username: "bob".to_string(),
                password: TestContext::PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        let session = AuthService::new(&t.ctx)
            .authenticate(&response.access_token)
            .await
            .unwrap();
        assert_eq!(session.role, Role::Applicant);
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_login() {
        let t = TestContext::new();
        t.register_applicant("bob").await;

        let err = AuthService::new(&t.ctx)
            .login(LoginRequest {
                username: "bob".to_string(),
                password: TestContext::PASSWORD.to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_alike() {
        let t = TestContext::new();
        t.verified_applicant("bob").await;
        let auth = AuthService::new(&t.ctx);

        let wrong = auth
            .login(LoginRequest {
                username: "bob".to_string(),
                password: "Nope12345".to_string(),
            })
            .await
            .unwrap_err();
        let unknown = auth
            .login(LoginRequest {
                username: "alice".to_string(),
                password: TestContext::PASSWORD.to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong.error_code(), unknown.error_code());
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn test_unknown_user_login_still_hashes() {
        let t = TestContext::new();
        let auth = AuthService::new(&t.ctx);

        let hash = jobboard_common::auth::hash_password(TestContext::PASSWORD).unwrap();
        let started = std::time::Instant::now();
        jobboard_common::auth::verify_password("Nope12345", &hash).unwrap();
        let one_verify = started.elapsed();

        let started = std::time::Instant::now();
        let err = auth
            .login(LoginRequest {
                username: "nobody".to_string(),
                password: "Nope12345".to_string(),
            })
            .await
            .unwrap_err();
        let unknown = started.elapsed();

        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
        assert!(unknown >= one_verify / 4, "{unknown:?} vs {one_verify:?}");
    }

    #[tokio::test]
    async fn test_logged_out_session_no_longer_authenticates() {
        let t = TestContext::new();
        let token = t.verified_applicant("bob").await;
        let auth = AuthService::new(&t.ctx);

        let session = auth.authenticate(&token).await.unwrap();
        auth.logout(&session).await.unwrap();

        let err = auth.authenticate(&token).await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SESSION");
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let t = TestContext::new();
        let err = AuthService::new(&t.ctx)
            .authenticate("not-a-jwt")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_require_role() {
        let session = SessionContext {
            user_id: UserId::new(1),
            role: Role::Company,
            session_id: "s".to_string(),
        };
        assert!(session.require_role(Role::Company).is_ok());
        assert!(matches!(
            session.require_role(Role::Applicant),
            Err(DomainError::RoleRequired(Role::Applicant))
        ));
    }
}
