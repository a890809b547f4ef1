//! Ports implemented by the infrastructure crates

mod mailer;
mod repositories;

pub use mailer::{EmailMessage, Mailer};
pub use repositories::{
    AccountRepository, ApplicationRepository, JobRepository, RepoResult, SessionRepository,
};
