//! Shared fixtures for service tests

use std::sync::Arc;

use jobboard_common::{JwtService, VerificationTokenService};
use jobboard_db::MemoryStore;

use crate::dto::{
    CreateJobRequest, RegisterApplicantRequest, RegisterCompanyRequest, RegistrationResponse,
};
use crate::mail::OutboxMailer;

use super::{
    AuthService, RegistrationService, ServiceContext, ServiceContextBuilder, SessionContext,
    VerificationService,
};

pub struct TestContext {
    pub store: MemoryStore,
    pub outbox: OutboxMailer,
    pub ctx: ServiceContext,
}

impl TestContext {
    pub const PASSWORD: &'static str = "Password123";

    pub fn new() -> Self {
        let store = MemoryStore::new();
        let outbox = OutboxMailer::new();
        let ctx = ServiceContextBuilder::new()
            .memory(store.clone())
            .mailer(Arc::new(outbox.clone()))
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .verification_tokens(Arc::new(VerificationTokenService::new(
                "test-verification-secret",
                VerificationTokenService::DEFAULT_TTL,
            )))
            .public_url("http://jobs.test")
            .build()
            .unwrap();

        Self { store, outbox, ctx }
    }

    pub fn applicant_request(username: &str) -> RegisterApplicantRequest {
        RegisterApplicantRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: "Test".to_string(),
            last_name: "Applicant".to_string(),
            password: Self::PASSWORD.to_string(),
            confirm_password: Self::PASSWORD.to_string(),
        }
    }

    pub fn company_request(username: &str, name: &str) -> RegisterCompanyRequest {
        RegisterCompanyRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            company_name: name.to_string(),
            password: Self::PASSWORD.to_string(),
            confirm_password: Self::PASSWORD.to_string(),
        }
    }

    pub fn job_request(title: &str) -> CreateJobRequest {
        CreateJobRequest {
            title: title.to_string(),
            description: "Work on things".to_string(),
            location: "Remote".to_string(),
            job_type: None,
            salary: None,
        }
    }

    pub async fn register_applicant(&self, username: &str) -> RegistrationResponse {
        RegistrationService::new(&self.ctx)
            .register_applicant(Self::applicant_request(username))
            .await
            .unwrap()
    }

    pub async fn register_company(&self, username: &str, name: &str) -> RegistrationResponse {
        RegistrationService::new(&self.ctx)
            .register_company(Self::company_request(username, name))
            .await
            .unwrap()
    }

    /// `(uid, token)` from the last verification email sent to `email`
    pub fn link_parts(&self, email: &str) -> (String, String) {
        let link = self.outbox.last_link_to(email).unwrap();
        let (_, tail) = link.split_once("/verify/").unwrap();
        let (uid, token) = tail.split_once('/').unwrap();
        (uid.to_string(), token.to_string())
    }

    async fn verify(&self, email: &str) -> String {
        let (uid, token) = self.link_parts(email);
        VerificationService::new(&self.ctx)
            .verify(&uid, &token)
            .await
            .unwrap()
            .access_token
    }

    /// Register and verify an applicant; returns its access token
    pub async fn verified_applicant(&self, username: &str) -> String {
        self.register_applicant(username).await;
        self.verify(&format!("{username}@example.com")).await
    }

    pub async fn applicant_session(&self, username: &str) -> SessionContext {
        let token = self.verified_applicant(username).await;
        AuthService::new(&self.ctx).authenticate(&token).await.unwrap()
    }

    pub async fn company_session(&self, username: &str, name: &str) -> SessionContext {
        self.register_company(username, name).await;
        let token = self.verify(&format!("{username}@example.com")).await;
        AuthService::new(&self.ctx).authenticate(&token).await.unwrap()
    }
}
