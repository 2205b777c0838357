//! Page Data Structures
//!
//! This module defines the `Page` struct and the types that govern how pages
//! group and order themselves in the content tree.
//!
//! # Architecture
//!
//! - **Weak parent link**: `parent_id` is a back-reference, not ownership
//! - **Dense sibling order**: `position` values are contiguous integers
//!   starting at 1, unique within a [`ScopeKey`]
//! - **Menu partitioning**: top-level pages are grouped by [`MenuType`];
//!   two top-level pages in different menus are never siblings
//! - **Minimum-tier access**: `viewable_by`/`editable_by` declare the lowest
//!   [`Tier`] allowed to view or edit the page
//!
//! # Examples
//!
//! ```rust
//! use pagetree_core::models::{MenuType, Page, PageKind, Tier};
//!
//! let home = Page::new("Home", "home", None, MenuType::Primary, PageKind::General);
//! assert!(home.is_top_level());
//! assert_eq!(home.viewable_by, Tier::Public);
//! ```

use crate::models::{Tier, ValidationError};
use crate::utils::slug::slugify;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Origin of every sibling sequence. Positions run `1..=len` with no gaps.
pub const POSITION_ORIGIN: i64 = 1;

/// Menu a top-level page belongs to.
///
/// Used as the sibling-grouping scope for pages without a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    Primary,
    Secondary,
}

/// Content archetype of a page.
///
/// Determines which listing the page presents (general articles, dated news,
/// a calendar of events, or a blog of dated posts with comments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    General,
    News,
    Calendar,
    Blog,
}

/// Grouping within which sibling order is maintained.
///
/// Children share their parent's id; top-level pages are additionally
/// partitioned by menu. Component positions live in their own per-page scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Top-level pages of one menu
    TopLevel(MenuType),
    /// Children of one parent page
    Children(String),
    /// Components owned by one page
    PageComponents(String),
}

/// A page in the content tree.
///
/// Pages own their components, events, and content items; destroying a page
/// cascades to all of them and to every descendant page. The configured home
/// page can never be destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique identifier (UUID)
    pub id: String,

    /// Display title (required)
    pub title: String,

    /// Short name used for permalinks (required)
    pub name: String,

    /// Parent page ID; `None` for top-level pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Dense position among siblings sharing this page's scope
    pub position: i64,

    /// Content archetype
    pub kind: PageKind,

    /// Menu grouping; only meaningful for top-level pages
    pub menu: MenuType,

    /// Minimum tier allowed to view this page
    pub viewable_by: Tier,

    /// Minimum tier allowed to edit this page
    pub editable_by: Tier,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl Page {
    /// Create a new Page with an auto-generated UUID.
    ///
    /// The page starts unpositioned (`position = 0`); a position is assigned
    /// when the page service inserts it into its sibling scope. Access
    /// defaults to publicly viewable, admin editable.
    pub fn new(
        title: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<String>,
        menu: MenuType,
        kind: PageKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            name: name.into(),
            parent_id,
            position: 0,
            kind,
            menu,
            viewable_by: Tier::Public,
            editable_by: Tier::Admin,
            created_at: now,
            modified_at: now,
        }
    }

    /// Set the minimum tiers for viewing and editing
    pub fn with_access(mut self, viewable_by: Tier, editable_by: Tier) -> Self {
        self.viewable_by = viewable_by;
        self.editable_by = editable_by;
        self
    }

    /// Validate required fields
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if `title` or `name` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        Ok(())
    }

    /// Whether this page has no parent
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// The scope this page's sibling order lives in.
    ///
    /// Children are scoped by parent; top-level pages by menu.
    pub fn scope_key(&self) -> ScopeKey {
        match &self.parent_id {
            Some(parent) => ScopeKey::Children(parent.clone()),
            None => ScopeKey::TopLevel(self.menu),
        }
    }

    /// URL-safe permalink derived from the page name
    pub fn permalink(&self) -> String {
        slugify(&self.name)
    }

    /// Route parameter: `{id}-{permalink}`
    pub fn slug(&self) -> String {
        format!("{}-{}", self.id, self.permalink())
    }
}

/// Sparse update for a page; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    pub title: Option<String>,
    pub name: Option<String>,
    pub kind: Option<PageKind>,
    pub viewable_by: Option<Tier>,
    pub editable_by: Option<Tier>,
}

impl PageUpdate {
    /// Apply this update to a page, bumping `modified_at`
    pub fn apply(self, page: &mut Page) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(name) = self.name {
            page.name = name;
        }
        if let Some(kind) = self.kind {
            page.kind = kind;
        }
        if let Some(viewable_by) = self.viewable_by {
            page.viewable_by = viewable_by;
        }
        if let Some(editable_by) = self.editable_by {
            page.editable_by = editable_by;
        }
        page.modified_at = Utc::now();
    }
}
