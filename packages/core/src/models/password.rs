//! Password Resets
//!
//! A reset record carries a one-shot code with a 24-hour expiry. Delivery
//! goes through the external mailer collaborator after the record persists;
//! mailer failures never invalidate the record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a reset code stays redeemable
const RESET_VALIDITY_HOURS: i64 = 24;

/// A pending password-reset request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    /// Unique identifier (UUID)
    pub id: String,

    /// Account e-mail the reset was requested for
    pub email: String,

    /// One-shot reset code included in the mailed link
    pub reset_code: String,

    /// Moment the code stops being redeemable
    pub expiration: DateTime<Utc>,

    /// Whether the code has already been redeemed
    pub used: bool,
}

impl PasswordReset {
    /// Create a new reset valid for 24 hours from `now`
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            reset_code: Uuid::new_v4().to_string(),
            expiration: now + Duration::hours(RESET_VALIDITY_HOURS),
            used: false,
        }
    }

    /// Whether the code can still be redeemed at `now`
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        !self.used && now < self.expiration
    }
}
