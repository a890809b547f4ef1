//! Mailer implementations
//!
//! Neither mailer talks to an SMTP server. [`LogMailer`] writes each message to
//! the tracing subscriber; [`OutboxMailer`] keeps them in memory so tests and
//! local runs can read verification links back.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info};

use jobboard_core::{DomainError, EmailMessage, Mailer};

/// The verification link inside a message body, if there is one
pub fn verification_link_in(body: &str) -> Option<&str> {
    body.lines()
        .map(str::trim)
        .find(|line| line.contains("/verify/"))
}

/// Logs every outgoing message.
///
/// The body only goes out at `debug`. With [`LogMailer::with_links`] the
/// verification link is also logged at `info`, so an account can be activated
/// from a server running with the default filter.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
    log_links: bool,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            log_links: false,
        }
    }

    /// Log verification links at `info`
    pub fn with_links(mut self, log_links: bool) -> Self {
        self.log_links = log_links;
        self
    }

    /// Link to write at `info` for this message
    fn visible_link<'m>(&self, message: &'m EmailMessage) -> Option<&'m str> {
        if self.log_links {
            verification_link_in(&message.body)
        } else {
            None
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError> {
        info!(from = %self.from, to = %message.to, subject = %message.subject, "Sending email");
        if let Some(link) = self.visible_link(message) {
            info!(to = %message.to, %link, "Verification link");
        }
        debug!(body = %message.body, "Email body");
        Ok(())
    }
}

/// Captures outgoing messages in memory
#[derive(Debug, Clone, Default)]
pub struct OutboxMailer {
    messages: Arc<Mutex<Vec<EmailMessage>>>,
}

impl OutboxMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message sent so far, oldest first
    pub fn messages(&self) -> Vec<EmailMessage> {
        self.messages.lock().clone()
    }

    /// Most recent message addressed to `to`
    pub fn last_to(&self, to: &str) -> Option<EmailMessage> {
        self.messages.lock().iter().rev().find(|m| m.to == to).cloned()
    }

    /// Verification link from the most recent message addressed to `to`
    pub fn last_link_to(&self, to: &str) -> Option<String> {
        self.last_to(to)
            .and_then(|m| verification_link_in(&m.body).map(ToString::to_string))
    }
}

#[async_trait]
impl Mailer for OutboxMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError> {
        debug!(to = %message.to, subject = %message.subject, "Captured email");
        self.messages.lock().push(message.clone());
        Ok(())
    }
}
