//! Moderated Comments
//!
//! Comments attach to content items and pass through the external
//! spam-checking collaborator after they persist. The checker's verdict
//! maps onto [`ModerationStatus`]; a checker failure leaves the comment
//! pending rather than blocking the submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation state of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    /// Awaiting a spam verdict
    Pending,
    /// Checker judged it ham
    Approved,
    /// Checker judged it spam
    Rejected,
}

/// A visitor comment on a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier (UUID)
    pub id: String,

    /// Content item this comment belongs to
    pub item_id: String,

    /// Author display name
    pub author: String,

    /// Author e-mail
    pub email: String,

    /// Comment body
    pub body: String,

    /// Moderation state
    pub status: ModerationStatus,

    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new pending comment with an auto-generated UUID
    pub fn new(
        item_id: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item_id: item_id.into(),
            author: author.into(),
            email: email.into(),
            body: body.into(),
            status: ModerationStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
