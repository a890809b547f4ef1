//! End-to-end API tests
//!
//! Each test starts its own server. With `DATABASE_URL` set the server runs
//! against PostgreSQL, otherwise against the in-memory store.
//!
//! Run with: cargo test -p integration-tests

use integration_tests::*;
use reqwest::StatusCode;

async fn registered_applicant(server: &TestServer, prefix: &str) -> (String, String) {
    let request = RegisterApplicantRequest::unique(prefix);
    let response = server.post("/api/v1/register/applicant", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let token = server.follow_verification(&request.email).await.unwrap();
    (request.username, token)
}

async fn registered_company(server: &TestServer, prefix: &str, name: &str) -> (String, String) {
    let request = RegisterCompanyRequest::unique(prefix, name);
    let response = server.post("/api/v1/register/company", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let token = server.follow_verification(&request.email).await.unwrap();
    (request.username, token)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Registration and verification
// ============================================================================

#[tokio::test]
async fn test_applicant_signup_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterApplicantRequest::unique("alice");

    let response = server.post("/api/v1/register/applicant", &request).await.unwrap();
    let registered: RegistrationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(registered.verification_sent);
    assert_eq!(registered.user.username, request.username);
    assert_eq!(registered.user.role, "applicant");
    assert!(!registered.user.is_active);
    assert!(!registered.user.email_verified);

    // Unverified accounts cannot log in
    let login = LoginRequest {
        username: request.username.clone(),
        password: TEST_PASSWORD.to_string(),
    };
    let response = server.post("/api/v1/login", &login).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    let link = server.verification_link(&request.email).unwrap();
    assert!(link.starts_with(&format!("{}/api/v1/verify/", server.base_url())));

    let response = server.client.get(&link).send().await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.account.user.is_active);
    assert!(auth.account.user.email_verified);
    assert_eq!(auth.account.user.id, registered.user.id);
    assert_eq!(auth.account.profile["role"], "applicant");

    // The link is spent once used
    let response = server.client.get(&link).send().await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_VERIFICATION_LINK")
        .await
        .unwrap();

    // And login now succeeds
    let response = server.post("/api/v1/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.account.user.username, request.username);
}

#[tokio::test]
async fn test_company_signup_creates_profile() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = registered_company(&server, "acme", "Acme").await;

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(account.user.role, "company");
    assert_eq!(account.profile["role"], "company");
    assert_eq!(account.profile["name"], "Acme");
}

#[tokio::test]
async fn test_registration_rejections() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut mismatched = RegisterApplicantRequest::unique("mismatch");
    mismatched.confirm_password = "SomethingElse1".to_string();
    let response = server.post("/api/v1/register/applicant", &mismatched).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    assert!(error["details"]["confirm_password"].is_array(), "{error}");

    let first = RegisterApplicantRequest::unique("dup");
    let response = server.post("/api/v1/register/applicant", &first).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut second = RegisterCompanyRequest::unique("other", "Other Co");
    second.username = first.username.clone();
    let response = server.post("/api/v1/register/company", &second).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "USERNAME_TAKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_resend_verification_is_uniform() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterApplicantRequest::unique("resend");
    let response = server.post("/api/v1/register/applicant", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let first_link = server.verification_link(&request.email).unwrap();

    let known = serde_json::json!({ "username": request.username });
    let response = server.post("/api/v1/register/resend", &known).await.unwrap();
    let known_body: serde_json::Value = assert_json(response, StatusCode::ACCEPTED).await.unwrap();

    let unknown = serde_json::json!({ "username": unique_username("ghost") });
    let response = server.post("/api/v1/register/resend", &unknown).await.unwrap();
    let unknown_body: serde_json::Value =
        assert_json(response, StatusCode::ACCEPTED).await.unwrap();

    assert_eq!(known_body, unknown_body);
    assert_eq!(server.outbox.messages().len(), 2);

    // Either link activates the account
    let response = server.client.get(&first_link).send().await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_tampered_verification_link() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterApplicantRequest::unique("tamper");
    let response = server.post("/api/v1/register/applicant", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let link = server.verification_link(&request.email).unwrap();
    let forged = format!("{}x", link.trim_end_matches('/'));
    let response = server.client.get(&forged).send().await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_VERIFICATION_LINK")
        .await
        .unwrap();

    // The genuine link still works afterwards
    let response = server.client.get(&link).send().await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_logout_revokes_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = registered_applicant(&server, "leaving").await;

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_auth_empty("/api/v1/logout", &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_SESSION")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/users/@me", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Jobs and applications
// ============================================================================

#[tokio::test]
async fn test_job_board_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, acme) = registered_company(&server, "acme", "Acme").await;
    let (_, bob) = registered_applicant(&server, "bob").await;

    let mut posting = CreateJobRequest::titled("Rust Engineer");
    posting.salary = Some("100k".to_string());
    let response = server.post_auth("/api/v1/jobs", &acme, &posting).await.unwrap();
    let job: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(job.title, "Rust Engineer");
    assert_eq!(job.job_type, "Full-Time");
    assert!(job.is_active);

    let response = server.get("/api/v1/jobs").await.unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(jobs.iter().any(|j| j.id == job.id));

    let response = server.get(&format!("/api/v1/jobs/{}", job.id)).await.unwrap();
    let fetched: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.company_id, job.company_id);

    let apply_path = format!("/api/v1/jobs/{}/apply", job.id);
    let response = server.post_auth_empty(&apply_path, &bob).await.unwrap();
    let application: ApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(application.job_id, job.id);
    assert_eq!(application.status, "applied");
    assert!(application.applied_at <= chrono::Utc::now());

    let response = server.post_auth_empty(&apply_path, &bob).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "ALREADY_APPLIED")
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/users/@me/applications", &bob).await.unwrap();
    let mine: Vec<ApplicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, application.id);

    let applications_path = format!("/api/v1/jobs/{}/applications", job.id);
    let response = server.get_auth(&applications_path, &acme).await.unwrap();
    let received: Vec<ApplicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].applicant_id, application.applicant_id);
}

#[tokio::test]
async fn test_roles_are_enforced() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, acme) = registered_company(&server, "acme", "Acme").await;
    let (_, globex) = registered_company(&server, "globex", "Globex").await;
    let (_, bob) = registered_applicant(&server, "bob").await;

    let response = server
        .post_auth("/api/v1/jobs", &bob, &CreateJobRequest::titled("Not allowed"))
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "ROLE_REQUIRED")
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/jobs", &acme, &CreateJobRequest::titled("Backend"))
        .await
        .unwrap();
    let job: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/jobs/{}/apply", job.id), &acme)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "ROLE_REQUIRED")
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/v1/jobs/{}/applications", job.id), &globex)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_JOB_OWNER")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unknown_job() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, bob) = registered_applicant(&server, "bob").await;

    let response = server.get("/api/v1/jobs/999999999").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_JOB")
        .await
        .unwrap();

    let response = server
        .post_auth_empty("/api/v1/jobs/999999999/apply", &bob)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_JOB")
        .await
        .unwrap();
}

// ============================================================================
// Profiles
// ============================================================================

#[tokio::test]
async fn test_profile_updates_follow_role() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, acme) = registered_company(&server, "acme", "Acme").await;
    let (_, bob) = registered_applicant(&server, "bob").await;

    let update = serde_json::json!({
        "description": "We make everything",
        "website": "https://acme.example.com"
    });
    let response = server
        .patch_auth("/api/v1/users/@me/profile", &acme, &update)
        .await
        .unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(account.profile["description"], "We make everything");
    assert_eq!(account.profile["name"], "Acme");

    let update = serde_json::json!({ "bio": "Rustacean" });
    let response = server
        .patch_auth("/api/v1/users/@me/profile", &bob, &update)
        .await
        .unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(account.profile["bio"], "Rustacean");

    // Company fields are not accepted from an applicant
    let update = serde_json::json!({ "website": "https://bob.example.com" });
    let response = server
        .patch_auth("/api/v1/users/@me/profile", &bob, &update)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}
