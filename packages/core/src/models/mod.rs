//! Data Models
//!
//! This module contains the core data structures of the page tree:
//!
//! - `Page` - a node in the content tree, with menu scope and access tiers
//! - `Component` - a positioned content embed owned by a page
//! - `Event` - date-bound content with all-day and timed variants
//! - `ContentItem` - generic dated content record (articles, news, posts, documents)
//! - `Comment` / `PasswordReset` - moderated comments and reset codes
//! - `Tier` - the ordered permission tier used by the visibility model

mod comment;
mod component;
mod content;
mod event;
mod page;
mod password;
mod role;

mod event_test;

pub use comment::{Comment, ModerationStatus};
pub use component::{Component, ComponentKind, ContentOrder, SnippetKind};
pub use content::{ContentItem, ContentKind};
pub use event::Event;
pub use page::{MenuType, Page, PageKind, PageUpdate, ScopeKey, POSITION_ORIGIN};
pub use password::PasswordReset;
pub use role::Tier;

use thiserror::Error;

/// Validation errors for model records
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}
