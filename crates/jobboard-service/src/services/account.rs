//! Account service - the caller's own user and profile

use tracing::{info, instrument};
use validator::Validate;

use jobboard_core::entities::Role;
use jobboard_core::DomainError;

use crate::dto::{AccountResponse, UpdateProfileRequest};

use super::auth::SessionContext;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn current(&self, session: &SessionContext) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_account(session.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(session.user_id))?;
        Ok(AccountResponse::from(&account))
    }

    /// Update the profile matching the caller's role.
    ///
    /// Sending a field that belongs to the other role is a validation error.
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn update_profile(
        &self,
        session: &SessionContext,
        request: UpdateProfileRequest,
    ) -> ServiceResult<AccountResponse> {
        request.validate()?;

        let repo = self.ctx.account_repo();
        match session.role {
            Role::Company => {
                reject_foreign_fields(&request.applicant_fields(), Role::Company)?;
                repo.update_company_profile(session.user_id, request.into_company_update())
                    .await?;
            }
            Role::Applicant => {
                reject_foreign_fields(&request.company_fields(), Role::Applicant)?;
                repo.update_applicant_profile(session.user_id, request.into_applicant_update())
                    .await?;
            }
        }
        info!("Profile updated");

        self.current(session).await
    }
}

fn reject_foreign_fields(fields: &[&str], role: Role) -> ServiceResult<()> {
    if fields.is_empty() {
        return Ok(());
    }
    Err(ServiceError::validation(format!(
        "{} cannot be set on {role} accounts",
        fields.join(", ")
    )))
}
