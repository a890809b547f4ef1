//! Service context - dependency container for services
//!
//! Holds the repositories, the mailer and the token services needed by services.

use std::sync::Arc;

use jobboard_common::{JwtService, VerificationTokenService};
use jobboard_core::traits::{
    AccountRepository, ApplicationRepository, JobRepository, Mailer, SessionRepository,
};
use jobboard_db::{
    MemoryStore, PgAccountRepository, PgApplicationRepository, PgJobRepository, PgPool,
    PgSessionRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (PostgreSQL or in-memory)
/// - The outbound mailer
/// - JWT service for session tokens
/// - Verification token service for activation links
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    job_repo: Arc<dyn JobRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
    session_repo: Arc<dyn SessionRepository>,

    mailer: Arc<dyn Mailer>,

    // Token services
    jwt_service: Arc<JwtService>,
    verification_tokens: Arc<VerificationTokenService>,

    /// Base URL that verification links point at
    public_url: String,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the job repository
    pub fn job_repo(&self) -> &dyn JobRepository {
        self.job_repo.as_ref()
    }

    /// Get the application repository
    pub fn application_repo(&self) -> &dyn ApplicationRepository {
        self.application_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Collaborators ===

    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn verification_tokens(&self) -> &VerificationTokenService {
        self.verification_tokens.as_ref()
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("mailer", &"dyn Mailer")
            .field("public_url", &self.public_url)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    job_repo: Option<Arc<dyn JobRepository>>,
    application_repo: Option<Arc<dyn ApplicationRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    mailer: Option<Arc<dyn Mailer>>,
    jwt_service: Option<Arc<JwtService>>,
    verification_tokens: Option<Arc<VerificationTokenService>>,
    public_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories sharing one pool
    pub fn postgres(self, pool: PgPool) -> Self {
        self.account_repo(Arc::new(PgAccountRepository::new(pool.clone())))
            .job_repo(Arc::new(PgJobRepository::new(pool.clone())))
            .application_repo(Arc::new(PgApplicationRepository::new(pool.clone())))
            .session_repo(Arc::new(PgSessionRepository::new(pool)))
    }

    /// Use one in-memory store for every repository
    pub fn memory(self, store: MemoryStore) -> Self {
        self.account_repo(Arc::new(store.clone()))
            .job_repo(Arc::new(store.clone()))
            .application_repo(Arc::new(store.clone()))
            .session_repo(Arc::new(store))
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn job_repo(mut self, repo: Arc<dyn JobRepository>) -> Self {
        self.job_repo = Some(repo);
        self
    }

    pub fn application_repo(mut self, repo: Arc<dyn ApplicationRepository>) -> Self {
        self.application_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn verification_tokens(mut self, service: Arc<VerificationTokenService>) -> Self {
        self.verification_tokens = Some(service);
        self
    }

    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = Some(url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let required = |name: &str| ServiceError::validation(format!("{name} is required"));

        Ok(ServiceContext {
            account_repo: self.account_repo.ok_or_else(|| required("account_repo"))?,
            job_repo: self.job_repo.ok_or_else(|| required("job_repo"))?,
            application_repo: self.application_repo.ok_or_else(|| required("application_repo"))?,
            session_repo: self.session_repo.ok_or_else(|| required("session_repo"))?,
            mailer: self.mailer.ok_or_else(|| required("mailer"))?,
            jwt_service: self.jwt_service.ok_or_else(|| required("jwt_service"))?,
            verification_tokens: self
                .verification_tokens
                .ok_or_else(|| required("verification_tokens"))?,
            public_url: self
                .public_url
                .map(|url| url.trim_end_matches('/').to_string())
                .ok_or_else(|| required("public_url"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::OutboxMailer;

    #[test]
    fn test_build_requires_dependencies() {
        let err = ServiceContextBuilder::new()
            .memory(MemoryStore::new())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("mailer is required"));
    }

    #[test]
    fn test_public_url_trailing_slash_trimmed() {
        let ctx = ServiceContextBuilder::new()
            .memory(MemoryStore::new())
            .mailer(Arc::new(OutboxMailer::new()))
            .jwt_service(Arc::new(JwtService::new("secret", 3600)))
            .verification_tokens(Arc::new(VerificationTokenService::new("secret", 3600)))
            .public_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(ctx.public_url(), "http://localhost:8080");
    }
}
