//! # jobboard-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Account, ApplicantAccount, ApplicantProfile, ApplicantProfileUpdate, Application,
    ApplicationStatus, CompanyAccount, CompanyProfile, CompanyProfileUpdate, Job, NewAccount,
    NewJob, NewProfile, Role, Session, User, DEFAULT_JOB_TYPE,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, ApplicationRepository, EmailMessage, JobRepository, Mailer, RepoResult,
    SessionRepository,
};
pub use value_objects::{
    validate_username, ApplicationId, IdParseError, JobId, UserId, USERNAME_MAX_LEN,
};
