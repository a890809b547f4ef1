//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod application;
pub mod auth;
pub mod context;
pub mod error;
pub mod job;
pub mod registration;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use account::AccountService;
pub use application::ApplicationService;
pub use auth::{AuthService, SessionContext};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{field_messages, ServiceError, ServiceResult};
pub use job::JobService;
pub use registration::{verification_link, RegistrationService, VERIFICATION_SUBJECT};
pub use verification::VerificationService;
