//! Spam Checking Contract
//!
//! The moderation flow submits a persisted comment for a verdict. The
//! checker is consulted after the comment commits; a checker failure
//! leaves the comment pending rather than blocking submission.

use crate::models::Comment;
use anyhow::Result;
use async_trait::async_trait;

/// Verdict returned by a spam checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamVerdict {
    /// Legitimate comment
    Ham,
    /// Spam
    Spam,
}

/// Construction-time configuration for spam-checker implementations.
#[derive(Debug, Clone, PartialEq)]
pub struct SpamConfig {
    /// API key for the external service
    pub api_key: String,
    /// Site URL reported alongside submissions
    pub site_url: String,
}

impl SpamConfig {
    pub fn new(api_key: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            site_url: site_url.into(),
        }
    }
}

/// Spam-detection seam.
#[async_trait]
pub trait SpamChecker: Send + Sync {
    /// Judge a submitted comment
    async fn check(&self, comment: &Comment) -> Result<SpamVerdict>;
}

/// Checker returning a fixed verdict. Useful as a default and in tests.
pub struct StaticSpamChecker {
    verdict: SpamVerdict,
}

impl StaticSpamChecker {
    pub fn new(verdict: SpamVerdict) -> Self {
        Self { verdict }
    }
}

#[async_trait]
impl SpamChecker for StaticSpamChecker {
    async fn check(&self, _comment: &Comment) -> Result<SpamVerdict> {
        Ok(self.verdict)
    }
}
