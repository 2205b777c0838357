//! Mail Delivery Contract
//!
//! The core hands a persisted password reset and a composed link to the
//! mailer; transport is entirely the implementation's concern. Failures
//! are logged by the caller and never propagate into the reset flow.

use crate::models::PasswordReset;
use anyhow::Result;
use async_trait::async_trait;

/// Construction-time configuration for mailer implementations.
#[derive(Debug, Clone, PartialEq)]
pub struct MailerConfig {
    /// Sender address for outbound mail
    pub from_address: String,
    /// Optional reply-to override
    pub reply_to: Option<String>,
}

impl MailerConfig {
    pub fn new(from_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
            reply_to: None,
        }
    }
}

/// Outbound mail delivery seam.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a password-reset message containing the given link.
    ///
    /// The reset already persists when this runs; implementations may be
    /// slow or fail without affecting the stored record.
    async fn send_reset(&self, reset: &PasswordReset, reset_url: &str) -> Result<()>;
}

/// Mailer that delivers nothing. For environments without outbound mail.
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send_reset(&self, reset: &PasswordReset, _reset_url: &str) -> Result<()> {
        tracing::debug!("NullMailer dropping reset mail for {}", reset.email);
        Ok(())
    }
}
