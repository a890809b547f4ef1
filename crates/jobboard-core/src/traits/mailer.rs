//! Outbound email port

use async_trait::async_trait;

use crate::error::DomainError;

/// A rendered plain-text email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery channel for notification emails.
///
/// Delivery and retry semantics belong to the implementation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError>;
}
