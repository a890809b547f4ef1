//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{
    Account, ApplicantProfileUpdate, CompanyProfileUpdate, NewAccount, NewProfile, Role, User,
};
use jobboard_core::error::DomainError;
use jobboard_core::traits::{AccountRepository, RepoResult};
use jobboard_core::value_objects::UserId;

use crate::mappers::{applicant_account, company_account};
use crate::models::{ApplicantModel, CompanyModel, UserModel};

use super::error::{map_db_error, map_unique_violation, profile_not_found, user_not_found};

const USER_COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, role, \
                            is_active, email_verified, date_joined";

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_user(&self, id: UserId) -> RepoResult<Option<UserModel>> {
        sqlx::query_as::<_, UserModel>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_user_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.fetch_user(id).await?.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(r"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_account(&self, id: UserId) -> RepoResult<Option<Account>> {
        let Some(model) = self.fetch_user(id).await? else {
            return Ok(None);
        };
        let user = User::try_from(model)?;

        let account = match user.role {
            Role::Company => {
                let profile = sqlx::query_as::<_, CompanyModel>(
                    r"SELECT user_id, name, description, website FROM companies WHERE user_id = $1",
                )
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| profile_not_found(id))?;
                company_account(user, profile)
            }
            Role::Applicant => {
                let profile = sqlx::query_as::<_, ApplicantModel>(
                    r"SELECT user_id, cv, bio FROM applicants WHERE user_id = $1",
                )
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?
                .ok_or_else(|| profile_not_found(id))?;
                applicant_account(user, profile)
            }
        };

        Ok(Some(account))
    }

    #[instrument(skip(self, account, password_hash), fields(username = %account.username))]
    async fn create_account(&self, account: &NewAccount, password_hash: &str) -> RepoResult<Account> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let user_model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (username, email, first_name, last_name, password_hash, role,
                               is_active, email_verified)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, FALSE)
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(password_hash)
        .bind(account.profile.role().as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        let user = User::try_from(user_model)?;

        let created = match &account.profile {
            NewProfile::Company { name } => {
                let profile = sqlx::query_as::<_, CompanyModel>(
                    r"
                    INSERT INTO companies (user_id, name)
                    VALUES ($1, $2)
                    RETURNING user_id, name, description, website
                    ",
                )
                .bind(user.id.into_inner())
                .bind(name)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
                company_account(user, profile)
            }
            NewProfile::Applicant => {
                let profile = sqlx::query_as::<_, ApplicantModel>(
                    r"
                    INSERT INTO applicants (user_id)
                    VALUES ($1)
                    RETURNING user_id, cv, bio
                    ",
                )
                .bind(user.id.into_inner())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
                applicant_account(user, profile)
            }
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(r"SELECT password_hash FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn mark_verified(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_active = TRUE, email_verified = TRUE
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn update_company_profile(
        &self,
        id: UserId,
        update: CompanyProfileUpdate,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE companies
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                website = COALESCE($4, website)
            WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(update.name)
        .bind(update.description)
        .bind(update.website)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn update_applicant_profile(
        &self,
        id: UserId,
        update: ApplicantProfileUpdate,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE applicants
            SET cv = COALESCE($2, cv),
                bio = COALESCE($3, bio)
            WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(update.cv)
        .bind(update.bio)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(id));
        }

        Ok(())
    }
}
