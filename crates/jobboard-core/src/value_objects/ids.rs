//! Typed identifiers
//!
//! Every row id is a store-assigned 64-bit integer. Wrapping each kind in its
//! own newtype keeps a `JobId` from being passed where a `UserId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from a path segment or header
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.parse::<i64>() {
                    Ok(id) if id > 0 => Ok(Self(id)),
                    _ => Err(IdParseError::InvalidFormat),
                }
            }
        }
    };
}

define_id!(
    /// Identifier of a user account (and, by extension, of its profile)
    UserId
);
define_id!(
    /// Identifier of a job posting
    JobId
);
define_id!(
    /// Identifier of a job application
    ApplicationId
);
