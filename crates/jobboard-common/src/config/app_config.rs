//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    pub jwt: JwtConfig,
    pub verification: VerificationConfig,
    pub mail: MailConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    /// Externally reachable base URL, used to build links in emails
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where accounts, jobs and applications are persisted
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    /// Process-local store; contents are lost on restart
    Memory,
}

impl StorageConfig {
    #[must_use]
    pub fn database(&self) -> Option<&DatabaseConfig> {
        match self {
            Self::Postgres(db) => Some(db),
            Self::Memory => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Session token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl: i64,
}

/// Email verification token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationConfig {
    pub secret: String,
    /// Link lifetime in seconds
    #[serde(default = "default_verification_ttl")]
    pub ttl: i64,
}

/// Outbound mail configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_mail_from")]
    pub from: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "jobboard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_public_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_session_ttl() -> i64 {
    86400 // 1 day
}

fn default_verification_ttl() -> i64 {
    259_200 // 3 days
}

fn default_mail_from() -> String {
    "no-reply@jobboard.local".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required key is missing or a value does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        let storage = match lookup("STORAGE_BACKEND").as_deref().unwrap_or("postgres") {
            "memory" => StorageConfig::Memory,
            "postgres" => StorageConfig::Postgres(DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    lookup("DATABASE_MAX_CONNECTIONS"),
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    lookup("DATABASE_MIN_CONNECTIONS"),
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
                run_migrations: parse_or(
                    lookup("DATABASE_RUN_MIGRATIONS"),
                    "DATABASE_RUN_MIGRATIONS",
                    default_run_migrations,
                )?,
            }),
            other => return Err(ConfigError::InvalidValue("STORAGE_BACKEND", other.to_string())),
        };

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
                public_url: lookup("APP_PUBLIC_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_public_url),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup("API_PORT")
                    .ok_or(ConfigError::MissingVar("API_PORT"))
                    .and_then(|raw| parse_or(Some(raw), "API_PORT", || 0))?,
            },
            storage,
            verification: VerificationConfig {
                secret: lookup("VERIFICATION_SECRET").unwrap_or_else(|| jwt_secret.clone()),
                ttl: parse_or(lookup("VERIFICATION_TTL"), "VERIFICATION_TTL", default_verification_ttl)?,
            },
            jwt: JwtConfig {
                secret: jwt_secret,
                session_ttl: parse_or(lookup("SESSION_TTL"), "SESSION_TTL", default_session_ttl)?,
            },
            mail: MailConfig {
                from: lookup("MAIL_FROM").unwrap_or_else(default_mail_from),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    lookup("RATE_LIMIT_REQUESTS_PER_SECOND"),
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                )?,
                burst: parse_or(lookup("RATE_LIMIT_BURST"), "RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
