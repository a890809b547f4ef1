//! Model to entity mappers
//!
//! Columns holding enum values (role, status) are parsed here; an unknown
//! value surfaces as a `DatabaseError` rather than a panic.

mod job;
mod session;
mod user;

pub use user::{applicant_account, company_account, parse_role};
