//! Page Components
//!
//! A component is a positioned content embed owned by a page: a feed of
//! another page's content, a document list, or a plain text block. Feed
//! components name a [`SnippetKind`] and optionally a source page; the
//! snippet resolver turns that configuration into a bounded slice of
//! content at render time.

use crate::models::{ContentKind, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of items a feed component pulls
pub const DEFAULT_SNIPPET_LIMIT: i64 = 10;

/// Marker substituted for double quotes in component text bodies
const QUOTE_MARKER: &str = "[s-mark]";

/// What a component renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Feed of content pulled from another page
    PageFeed,
    /// Ordered document list
    Documents,
    /// Plain text block
    Text,
}

/// Which content type a feed component pulls from.
///
/// Closed enumeration: there is no runtime type lookup by name. An
/// unrecognized configuration simply cannot be represented; a feed
/// component with no kind at all fails at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetKind {
    Article,
    NewsItem,
    Post,
    Document,
    Event,
}

impl SnippetKind {
    /// The content-item kind this snippet kind maps to.
    ///
    /// `Event` has no content-item counterpart; event feeds are resolved
    /// through the scheduling model instead.
    pub fn content_kind(self) -> Option<ContentKind> {
        match self {
            SnippetKind::Article => Some(ContentKind::Article),
            SnippetKind::NewsItem => Some(ContentKind::NewsItem),
            SnippetKind::Post => Some(ContentKind::Post),
            SnippetKind::Document => Some(ContentKind::Document),
            SnippetKind::Event => None,
        }
    }
}

/// Ordering applied to a component's fetched content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentOrder {
    CreatedDesc,
    CreatedAsc,
    TitleDesc,
    TitleAsc,
}

/// A positioned content embed owned by exactly one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique identifier (UUID)
    pub id: String,

    /// Owning page
    pub page_id: String,

    /// Display title (required)
    pub title: String,

    /// Dense position among the owning page's components
    pub position: i64,

    /// What this component renders as
    pub component_type: ComponentKind,

    /// Content type a feed component pulls; expected for page feeds but not
    /// enforced at save time, resolution fails instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_kind: Option<SnippetKind>,

    /// Page the feed pulls from; falls back to the owning page when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_page: Option<String>,

    /// Ordering applied to fetched content
    pub order: ContentOrder,

    /// Result-count bound for fetched content
    pub limit: i64,

    /// Text body for text components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Component {
    /// Create a new component with an auto-generated UUID.
    ///
    /// Starts unpositioned; the page service assigns a position when the
    /// component enters its owning page's scope.
    pub fn new(
        page_id: impl Into<String>,
        title: impl Into<String>,
        component_type: ComponentKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            page_id: page_id.into(),
            title: title.into(),
            position: 0,
            component_type,
            snippet_kind: None,
            source_page: None,
            order: ContentOrder::CreatedDesc,
            limit: DEFAULT_SNIPPET_LIMIT,
            text: None,
            created_at: Utc::now(),
        }
    }

    /// Configure this component as a feed of the given kind
    pub fn with_feed(mut self, kind: SnippetKind, source_page: Option<String>) -> Self {
        self.snippet_kind = Some(kind);
        self.source_page = source_page;
        self
    }

    /// Set the fetch ordering and result bound
    pub fn with_order(mut self, order: ContentOrder, limit: i64) -> Self {
        self.order = order;
        self.limit = limit;
        self
    }

    /// Set the text body, normalizing quotes
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(normalize_text(&text.into()));
        self
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()));
        }
        Ok(())
    }

    pub fn is_page_feed(&self) -> bool {
        self.component_type == ComponentKind::PageFeed
    }

    pub fn is_documents(&self) -> bool {
        self.component_type == ComponentKind::Documents
    }

    pub fn is_text(&self) -> bool {
        self.component_type == ComponentKind::Text
    }
}

/// Replace double quotes with a marker the template layer can re-expand.
pub fn normalize_text(text: &str) -> String {
    text.replace('"', QUOTE_MARKER)
}
