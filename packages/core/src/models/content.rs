//! Generic Content Items
//!
//! One dated record type covers the page-owned content the snippet resolver
//! can pull: articles, news items, blog posts, and documents. The `kind`
//! tag replaces one table per type; entity-specific presentation stays in
//! the excluded rendering layer.

use crate::models::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind tag for a [`ContentItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    NewsItem,
    Post,
    Document,
}

/// A dated, positioned content record owned by a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique identifier (UUID)
    pub id: String,

    /// Owning page
    pub page_id: String,

    /// Content kind tag
    pub kind: ContentKind,

    /// Display title
    pub title: String,

    /// Body text
    pub body: String,

    /// Dense position among the owning page's items of this kind
    pub position: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create a new content item with an auto-generated UUID.
    ///
    /// Starts unpositioned; the page service assigns a position when the
    /// item enters its per-kind scope on the owning page.
    pub fn new(
        page_id: impl Into<String>,
        kind: ContentKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            page_id: page_id.into(),
            kind,
            title: title.into(),
            body: body.into(),
            position: 0,
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp (ordering tests and imports)
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()));
        }
        Ok(())
    }
}
