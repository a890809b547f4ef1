//! Email verification links
//!
//! A link carries two parts: the user id encoded as URL-safe base64, and a
//! signed token `{sub, exp, fp}`. `fp` is an HMAC over the user's mutable
//! verification state, so a token stops validating as soon as the account is
//! activated or its email or password changes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jobboard_core::{User, UserId};
use jsonwebtoken::{crypto, decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Encode a user id for use in a verification URL
#[must_use]
pub fn encode_uid(id: UserId) -> String {
    URL_SAFE_NO_PAD.encode(id.to_string())
}

/// Decode a URL uid back to a user id
///
/// # Errors
/// Returns `InvalidVerificationLink` for anything that is not an encoded id
pub fn decode_uid(uid: &str) -> Result<UserId, AppError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(uid)
        .map_err(|_| AppError::InvalidVerificationLink)?;
    let text = String::from_utf8(bytes).map_err(|_| AppError::InvalidVerificationLink)?;
    text.parse::<UserId>()
        .map_err(|_| AppError::InvalidVerificationLink)
}

#[derive(Debug, Serialize, Deserialize)]
struct VerificationClaims {
    sub: String,
    exp: i64,
    fp: String,
}

/// Issues and checks email verification tokens
#[derive(Clone)]
pub struct VerificationTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: i64,
}

impl VerificationTokenService {
    /// Three days, matching the usual password-reset style link lifetime
    pub const DEFAULT_TTL: i64 = 259_200;

    #[must_use]
    pub fn new(secret: &str, ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    fn fingerprint_input(user: &User, password_hash: &str) -> Vec<u8> {
        format!(
            "{}|{}|{}|{}|{}",
            user.id, password_hash, user.is_active, user.email_verified, user.email
        )
        .into_bytes()
    }

    /// Issue a token for the user's current state
    ///
    /// # Errors
    /// Returns an internal error if signing fails
    pub fn issue(&self, user: &User, password_hash: &str) -> Result<String, AppError> {
        let fp = crypto::sign(
            &Self::fingerprint_input(user, password_hash),
            &self.encoding_key,
            Algorithm::HS256,
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign fingerprint: {e}")))?;

        let claims = VerificationClaims {
            sub: user.id.to_string(),
            exp: (Utc::now() + Duration::seconds(self.ttl)).timestamp(),
            fp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode token: {e}")))
    }

    /// Build the `{uid}/{token}` pair for a verification URL
    ///
    /// # Errors
    /// Returns an internal error if signing fails
    pub fn link_parts(&self, user: &User, password_hash: &str) -> Result<(String, String), AppError> {
        Ok((encode_uid(user.id), self.issue(user, password_hash)?))
    }

    /// Check a token against the user's current state
    ///
    /// # Errors
    /// Returns `InvalidVerificationLink` for any mismatch, bad signature or expiry
    pub fn verify(&self, token: &str, user: &User, password_hash: &str) -> Result<(), AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<VerificationClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidVerificationLink)?
            .claims;

        if claims.sub != user.id.to_string() {
            return Err(AppError::InvalidVerificationLink);
        }

        let matches = crypto::verify(
            &claims.fp,
            &Self::fingerprint_input(user, password_hash),
            &self.decoding_key,
            Algorithm::HS256,
        )
        .map_err(|_| AppError::InvalidVerificationLink)?;

        if matches {
            Ok(())
        } else {
            Err(AppError::InvalidVerificationLink)
        }
    }
}

impl std::fmt::Debug for VerificationTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationTokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
