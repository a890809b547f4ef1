//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use jobboard_api::{create_app, create_app_state_with_mailer};
use jobboard_common::AppConfig;
use jobboard_service::OutboxMailer;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Every email the server sent
    pub outbox: OutboxMailer,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(mut config: AppConfig) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Links in emails must point back at this server
        config.app.public_url = format!("http://{addr}");

        let outbox = OutboxMailer::new();
        let state = create_app_state_with_mailer(config, Arc::new(outbox.clone())).await?;
        let app = create_app(state)?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            outbox,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Full verification URL from the last email sent to `email`
    pub fn verification_link(&self, email: &str) -> Result<String> {
        self.outbox
            .last_link_to(email)
            .ok_or_else(|| anyhow::anyhow!("no verification email for {email}"))
    }

    /// Follow a verification link and return the access token
    pub async fn follow_verification(&self, email: &str) -> Result<String> {
        let link = self.verification_link(email)?;
        let response = self.client.get(&link).send().await?;
        let body: serde_json::Value = assert_json(response, StatusCode::OK).await?;
        body["access_token"]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| anyhow::anyhow!("verification response has no access_token"))
    }
}

/// Create a test configuration.
///
/// Uses PostgreSQL when `DATABASE_URL` is set, the in-memory store otherwise.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").ok();
    let storage = if database_url.is_some() { "postgres" } else { "memory" };

    AppConfig::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some(storage.to_string()),
        "DATABASE_URL" => database_url.clone(),
        "DATABASE_MAX_CONNECTIONS" => Some("5".to_string()),
        "DATABASE_MIN_CONNECTIONS" => Some("1".to_string()),
        "API_PORT" => Some("0".to_string()),
        "JWT_SECRET" => Some("integration-test-secret".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" | "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error` object
pub async fn assert_error(
    response: Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Result<serde_json::Value> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    let code = body["error"]["code"].as_str().unwrap_or_default();
    if code != expected_code {
        anyhow::bail!("Expected error code {expected_code}, got {code}. Body: {body}");
    }
    Ok(body["error"].clone())
}
