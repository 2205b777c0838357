//! Comment Moderation Flow
//!
//! Persists submitted comments and consults the external spam checker for
//! a verdict afterwards. The checker is best-effort: a failure leaves the
//! comment pending for manual review instead of bouncing the submission.

use crate::external::{SpamChecker, SpamVerdict};
use crate::models::{Comment, ModerationStatus, ValidationError};
use crate::services::error::ServiceError;
use crate::store::ContentStore;
use std::sync::Arc;

/// Comment submission and spam moderation.
#[derive(Clone)]
pub struct ModerationService {
    store: Arc<dyn ContentStore>,
    checker: Arc<dyn SpamChecker>,
}

impl ModerationService {
    /// Create a new ModerationService
    pub fn new(store: Arc<dyn ContentStore>, checker: Arc<dyn SpamChecker>) -> Self {
        Self { store, checker }
    }

    /// Submit a comment: persist it pending, then apply the checker's
    /// verdict.
    ///
    /// Ham approves, spam rejects, and a checker error leaves the comment
    /// pending (logged, never propagated).
    pub async fn submit_comment(&self, comment: Comment) -> Result<Comment, ServiceError> {
        if comment.author.trim().is_empty() {
            return Err(ValidationError::MissingField("author".to_string()).into());
        }
        if comment.body.trim().is_empty() {
            return Err(ValidationError::MissingField("body".to_string()).into());
        }

        let comment = self.store.insert_comment(comment).await?;

        match self.checker.check(&comment).await {
            Ok(SpamVerdict::Ham) => Ok(self
                .store
                .set_comment_status(&comment.id, ModerationStatus::Approved)
                .await?),
            Ok(SpamVerdict::Spam) => Ok(self
                .store
                .set_comment_status(&comment.id, ModerationStatus::Rejected)
                .await?),
            Err(e) => {
                tracing::warn!(
                    "Spam check failed for comment '{}', leaving pending: {}",
                    comment.id,
                    e
                );
                Ok(comment)
            }
        }
    }

    /// Approved comments on a content item, oldest first
    pub async fn visible_comments(&self, item_id: &str) -> Result<Vec<Comment>, ServiceError> {
        let mut comments = self.store.comments_for_item(item_id).await?;
        comments.retain(|c| c.status == ModerationStatus::Approved);
        Ok(comments)
    }
}
