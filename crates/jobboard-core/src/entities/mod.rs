//! Domain entities - core business objects

mod account;
mod application;
mod job;
mod session;
mod user;

pub use account::{
    Account, ApplicantAccount, ApplicantProfile, ApplicantProfileUpdate, CompanyAccount,
    CompanyProfile, CompanyProfileUpdate, NewAccount, NewProfile,
};
pub use application::{Application, ApplicationStatus};
pub use job::{Job, NewJob, DEFAULT_JOB_TYPE};
pub use session::Session;
pub use user::{Role, User};
