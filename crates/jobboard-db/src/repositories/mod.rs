//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in jobboard-core.

mod account;
mod application;
mod error;
mod job;
mod session;

pub use account::PgAccountRepository;
pub use application::PgApplicationRepository;
pub use job::PgJobRepository;
pub use session::PgSessionRepository;
