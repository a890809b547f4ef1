//! User entity - the login identity shared by applicants and companies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::UserId;

/// The two kinds of account on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Company,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Company => "company",
        }
    }

    /// Parse the stored representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "applicant" => Some(Self::Applicant),
            "company" => Some(Self::Company),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account record
///
/// The role is fixed at creation time; there is no setter for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub email_verified: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// "First Last", or the username when no name was given
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    #[inline]
    pub fn is_applicant(&self) -> bool {
        self.role == Role::Applicant
    }

    #[inline]
    pub fn is_company(&self) -> bool {
        self.role == Role::Company
    }

    /// Flip the account to active and verified
    pub fn mark_verified(&mut self) {
        self.is_active = true;
        self.email_verified = true;
    }
}
