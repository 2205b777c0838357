//! Password Reset Flow
//!
//! Issues reset codes and redeems them. Mail delivery is a best-effort
//! side effect after the reset record commits: a mailer failure is logged
//! and the stored reset stays redeemable, matching the rule that external
//! collaborator latency or failure never blocks the core's own state
//! changes.

use crate::config::SiteConfig;
use crate::external::Mailer;
use crate::models::PasswordReset;
use crate::services::error::ServiceError;
use crate::store::ContentStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Password-reset issue and redemption.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn ContentStore>,
    mailer: Arc<dyn Mailer>,
    config: SiteConfig,
}

impl AccountService {
    /// Create a new AccountService
    pub fn new(store: Arc<dyn ContentStore>, mailer: Arc<dyn Mailer>, config: SiteConfig) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }

    /// Issue a reset for the given address, valid 24 hours from now
    pub async fn request_reset(&self, email: &str) -> Result<PasswordReset, ServiceError> {
        self.request_reset_at(email, Utc::now()).await
    }

    /// Issue a reset valid 24 hours from `now`.
    ///
    /// The reset persists first; only then is the mailer invoked, and its
    /// failure does not surface to the requester.
    pub async fn request_reset_at(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<PasswordReset, ServiceError> {
        let reset = PasswordReset::new(email, now);
        let reset = self.store.insert_reset(reset).await?;

        let reset_url = format!(
            "{}/passwords/reset/{}",
            self.config.base_url.trim_end_matches('/'),
            reset.reset_code
        );
        if let Err(e) = self.mailer.send_reset(&reset, &reset_url).await {
            tracing::warn!("Failed to send reset mail to {}: {}", reset.email, e);
        }
        Ok(reset)
    }

    /// Redeem a reset code as of `now`.
    ///
    /// Returns `Ok(None)` for unknown, expired, or already-used codes;
    /// the caller re-presents the request form. A live code is marked
    /// used before it is returned.
    pub async fn redeem(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PasswordReset>, ServiceError> {
        let Some(reset) = self.store.reset_by_code(code).await? else {
            return Ok(None);
        };
        if !reset.is_live(now) {
            return Ok(None);
        }
        self.store.mark_reset_used(&reset.id).await?;
        Ok(Some(reset))
    }
}
