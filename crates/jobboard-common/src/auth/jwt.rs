//! JWT utilities for session authentication
//!
//! Provides access token encoding, decoding and validation using the `jsonwebtoken` crate.
//! Every token names the session it belongs to; the session row decides whether the
//! token is still honoured.

use chrono::{Duration, Utc};
use jobboard_core::{Role, UserId};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account role at login time
    pub role: Role,
    /// Session ID
    pub sid: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse::<UserId>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Access token handed to a client after login or verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_ttl: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and session lifetime (seconds)
    #[must_use]
    pub fn new(secret: &str, session_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_ttl,
        }
    }

    /// Session lifetime in seconds
    #[must_use]
    pub fn session_ttl(&self) -> i64 {
        self.session_ttl
    }

    /// Issue an access token bound to a session
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user_id: UserId, role: Role, session_id: &str) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            sid: session_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.session_ttl)).timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(AccessToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.session_ttl,
        })
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("session_ttl", &self.session_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 900)
    }

    #[test]
    fn test_issue_token() {
        let service = create_test_service();
        let token = service.issue(UserId::new(12345), Role::Company, "sess-1").unwrap();

        assert!(!token.access_token.is_empty());
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 900);
    }

    #[test]
    fn test_decode_round_trip() {
        let service = create_test_service();
        let token = service.issue(UserId::new(12345), Role::Applicant, "sess-1").unwrap();
        let claims = service.decode_token(&token.access_token).unwrap();

        assert_eq!(claims.user_id().unwrap(), UserId::new(12345));
        assert_eq!(claims.role, Role::Applicant);
        assert_eq!(claims.sid, "sess-1");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.decode_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = JwtService::new("another-secret", 900)
            .issue(UserId::new(1), Role::Applicant, "s")
            .unwrap();

        let result = create_test_service().decode_token(&token.access_token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        // Past the default 60s leeway
        let service = JwtService::new("test-secret-key-that-is-long-enough", -120);
        let token = service.issue(UserId::new(1), Role::Company, "s").unwrap();

        let result = service.decode_token(&token.access_token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }
}
