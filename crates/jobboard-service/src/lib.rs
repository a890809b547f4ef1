//! # jobboard-service
//!
//! Application layer containing business logic, services, DTOs and mailers.

pub mod dto;
pub mod mail;
pub mod services;

pub use mail::{LogMailer, OutboxMailer};
pub use services::{
    AccountService, ApplicationService, AuthService, JobService, RegistrationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SessionContext,
    VerificationService,
};
