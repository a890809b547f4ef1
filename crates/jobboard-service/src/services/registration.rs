//! Registration service
//!
//! Creates inactive accounts and mails their activation links.

use tracing::{error, info, instrument, warn};
use validator::Validate;

use jobboard_common::auth::{hash_password, validate_password_strength};
use jobboard_core::entities::{NewAccount, NewProfile, User};
use jobboard_core::{DomainError, EmailMessage};

use crate::dto::{
    AcceptedResponse, RegisterApplicantRequest, RegisterCompanyRequest, RegistrationResponse,
    ResendVerificationRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub const VERIFICATION_SUBJECT: &str = "Activate Your JobBoard Account";

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign up a job seeker
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_applicant(
        &self,
        request: RegisterApplicantRequest,
    ) -> ServiceResult<RegistrationResponse> {
        request.validate()?;

        let account = NewAccount {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            profile: NewProfile::Applicant,
        };
        self.register(account, &request.password).await
    }

    /// Sign up an employer
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_company(
        &self,
        request: RegisterCompanyRequest,
    ) -> ServiceResult<RegistrationResponse> {
        request.validate()?;

        let account = NewAccount {
            username: request.username,
            email: request.email,
            first_name: String::new(),
            last_name: String::new(),
            profile: NewProfile::Company {
                name: request.company_name,
            },
        };
        self.register(account, &request.password).await
    }

    async fn register(
        &self,
        account: NewAccount,
        password: &str,
    ) -> ServiceResult<RegistrationResponse> {
        validate_password_strength(password)?;

        if self
            .ctx
            .account_repo()
            .username_exists(&account.username)
            .await?
        {
            return Err(DomainError::UsernameTaken.into());
        }

        let password_hash =
            hash_password(password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // A concurrent sign-up that wins the race surfaces here as UsernameTaken
        let created = self
            .ctx
            .account_repo()
            .create_account(&account, &password_hash)
            .await?;

        info!(user_id = %created.id(), role = %created.role(), "Account registered");

        self.send_verification(created.user(), &password_hash).await?;

        Ok(RegistrationResponse::new(UserResponse::from(created.user())))
    }

    /// Send a fresh link if the account exists and is still inactive.
    ///
    /// The answer is the same whatever the outcome.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn resend_verification(
        &self,
        request: ResendVerificationRequest,
    ) -> ServiceResult<AcceptedResponse> {
        request.validate()?;

        let user = self
            .ctx
            .account_repo()
            .find_user_by_username(&request.username)
            .await?;

        match user {
            Some(user) if !user.is_active => {
                let hash = self.ctx.account_repo().get_password_hash(user.id).await?;
                if let Some(hash) = hash {
                    if let Err(e) = self.send_verification(&user, &hash).await {
                        error!(user_id = %user.id, error = %e, "Failed to resend verification email");
                    }
                }
            }
            Some(user) => warn!(user_id = %user.id, "Verification resend for active account"),
            None => warn!("Verification resend for unknown username"),
        }

        Ok(AcceptedResponse::verification_requested())
    }

    async fn send_verification(&self, user: &User, password_hash: &str) -> ServiceResult<()> {
        let (uid, token) = self
            .ctx
            .verification_tokens()
            .link_parts(user, password_hash)?;
        let link = verification_link(self.ctx.public_url(), &uid, &token);

        let message = EmailMessage {
            to: user.email.clone(),
            subject: VERIFICATION_SUBJECT.to_string(),
            body: format!(
                "Hi {},\n\n\
                 Please click the link below to verify your email address and activate your account:\n\n\
                 {link}\n\n\
                 If you did not sign up, you can ignore this email.\n",
                user.display_name()
            ),
        };

        self.ctx.mailer().send(&message).await?;
        info!(user_id = %user.id, "Verification email sent");
        Ok(())
    }
}

/// `{public_url}/api/v1/verify/{uid}/{token}`
pub fn verification_link(public_url: &str, uid: &str, token: &str) -> String {
    format!("{public_url}/api/v1/verify/{uid}/{token}")
}
