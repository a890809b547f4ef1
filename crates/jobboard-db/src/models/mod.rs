//! Database models - SQLx-compatible structs for PostgreSQL tables

mod job;
mod session;
mod user;

pub use job::{ApplicationModel, JobModel};
pub use session::SessionModel;
pub use user::{ApplicantModel, CompanyModel, UserModel};
