//! Value objects - immutable types that represent domain concepts

mod ids;
mod username;

pub use ids::{ApplicationId, IdParseError, JobId, UserId};
pub use username::{validate_username, USERNAME_MAX_LEN};
