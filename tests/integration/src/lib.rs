//! Integration test utilities for the job board
//!
//! This crate provides helpers for running end-to-end tests against
//! a real HTTP server.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
