//! Login sessions
//!
//! A session row backs every access token so that logout can take effect
//! before the token itself expires.

use chrono::{DateTime, Duration, Utc};

use super::user::Role;
use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: UserId,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(id: String, user_id: UserId, role: Role, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            role,
            created_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Neither revoked nor past its expiry at `now`
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.is_live_at(Utc::now())
    }
}
