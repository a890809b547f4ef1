//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Implementations must enforce uniqueness of
//! usernames and of (job, applicant) pairs themselves and report violations
//! as [`DomainError::UsernameTaken`] / [`DomainError::AlreadyApplied`].

use async_trait::async_trait;

use crate::entities::{
    Account, Application, ApplicantProfileUpdate, CompanyProfileUpdate, Job, NewAccount, NewJob,
    Session, User,
};
use crate::error::DomainError;
use crate::value_objects::{JobId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find user by ID
    async fn find_user_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username (exact match)
    async fn find_user_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Load a user together with its role-specific profile
    async fn find_account(&self, id: UserId) -> RepoResult<Option<Account>>;

    /// Insert an inactive user and its profile as a single unit.
    ///
    /// Either both rows exist afterwards or neither does.
    async fn create_account(&self, account: &NewAccount, password_hash: &str) -> RepoResult<Account>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Set is_active and email_verified
    async fn mark_verified(&self, id: UserId) -> RepoResult<()>;

    /// Update the company profile of a company account
    async fn update_company_profile(
        &self,
        id: UserId,
        update: CompanyProfileUpdate,
    ) -> RepoResult<()>;

    /// Update the applicant profile of an applicant account
    async fn update_applicant_profile(
        &self,
        id: UserId,
        update: ApplicantProfileUpdate,
    ) -> RepoResult<()>;
}

// ============================================================================
// Job Repository
// ============================================================================

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Find job by ID, active or not
    async fn find_by_id(&self, id: JobId) -> RepoResult<Option<Job>>;

    /// All active jobs, newest first
    async fn list_active(&self) -> RepoResult<Vec<Job>>;

    /// Create a new job
    async fn create(&self, job: &NewJob) -> RepoResult<Job>;
}

// ============================================================================
// Application Repository
// ============================================================================

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Check if the applicant already applied for the job
    async fn exists(&self, job_id: JobId, applicant_id: UserId) -> RepoResult<bool>;

    /// Create an application with the default status.
    ///
    /// A duplicate (job, applicant) pair fails with `AlreadyApplied`.
    async fn create(&self, job_id: JobId, applicant_id: UserId) -> RepoResult<Application>;

    /// Applications made by one applicant, newest first
    async fn find_by_applicant(&self, applicant_id: UserId) -> RepoResult<Vec<Application>>;

    /// Applications received for one job, oldest first
    async fn find_by_job(&self, job_id: JobId) -> RepoResult<Vec<Application>>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session, dropping every revoked or expired one first
    async fn create(&self, session: &Session) -> RepoResult<()>;

    /// Find session by ID, including revoked and expired ones not yet pruned
    async fn find(&self, id: &str) -> RepoResult<Option<Session>>;

    /// Mark a session revoked; revoking twice is a no-op
    async fn revoke(&self, id: &str) -> RepoResult<()>;
}
