//! ContentStore Trait - Persistence Abstraction Layer
//!
//! This module defines the `ContentStore` trait that abstracts record
//! persistence for the page tree. The trait keeps business logic in the
//! services independent of the backing store.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: all methods are async so embedded and networked
//!    backends share one contract
//! 2. **Ownership Semantics**: mutating methods take ownership of the
//!    record; callers clone if they need to retain the original
//! 3. **Error Handling**: `anyhow::Result` for flexible error context;
//!    services wrap failures in their own error type
//! 4. **Position Plans**: sibling renumbering arrives as one
//!    `Vec<(id, position)>` batch per scope, the unit a transactional
//!    backend should apply atomically

use crate::models::{
    Comment, Component, ContentItem, ContentKind, ContentOrder, Event, ModerationStatus, Page,
    PageUpdate, PasswordReset, ScopeKey,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Abstraction layer for page-tree persistence.
///
/// Implementations must be `Send + Sync` so futures may move between
/// threads.
///
/// # Method Categories
///
/// - **Pages**: CRUD, scope-ordered listing, position plans
/// - **Components**: CRUD scoped to the owning page, position plans
/// - **Events**: insert plus the two scheduling-window queries
/// - **Content items**: insert, per-kind scope with position plans, and
///   the snippet fetch
/// - **Comments / password resets**: the moderation and reset flows
/// - **Cascade removal**: bulk deletes used by page destruction
#[async_trait]
pub trait ContentStore: Send + Sync {
    //
    // PAGES
    //

    /// Persist a new page. Fails on duplicate id.
    async fn insert_page(&self, page: Page) -> Result<Page>;

    /// Fetch a page by id; `Ok(None)` when absent.
    async fn page(&self, id: &str) -> Result<Option<Page>>;

    /// Apply a sparse update to a page and return the updated record.
    async fn update_page(&self, id: &str, update: PageUpdate) -> Result<Page>;

    /// Re-home a page: set its parent and menu (scope fields only; the
    /// caller plans the position changes on both scopes).
    async fn set_page_scope(
        &self,
        id: &str,
        parent_id: Option<String>,
        menu: crate::models::MenuType,
    ) -> Result<Page>;

    /// All pages of one sibling scope, ordered by position.
    async fn pages_in_scope(&self, scope: &ScopeKey) -> Result<Vec<Page>>;

    /// Every page, in tree order: primary menu roots first, then secondary,
    /// each followed depth-first by its descendants in position order.
    async fn all_pages(&self) -> Result<Vec<Page>>;

    /// Apply a position plan to pages. One call per renumbered scope.
    async fn apply_page_positions(&self, plan: Vec<(String, i64)>) -> Result<()>;

    /// Remove the given pages. Returns the number removed.
    async fn remove_pages(&self, ids: &[String]) -> Result<u64>;

    //
    // COMPONENTS
    //

    /// Persist a new component. Fails on duplicate id.
    async fn insert_component(&self, component: Component) -> Result<Component>;

    /// Fetch a component by id; `Ok(None)` when absent.
    async fn component(&self, id: &str) -> Result<Option<Component>>;

    /// Components owned by a page, ordered by position.
    async fn components_for_page(&self, page_id: &str) -> Result<Vec<Component>>;

    /// Apply a position plan to components.
    async fn apply_component_positions(&self, plan: Vec<(String, i64)>) -> Result<()>;

    //
    // EVENTS
    //

    /// Persist a new event.
    async fn insert_event(&self, event: Event) -> Result<Event>;

    /// Events owned by a page, ordered by (datetime, from_date) ascending.
    async fn events_for_page(&self, page_id: &str) -> Result<Vec<Event>>;

    /// Events of a page intersecting `[from, to]`: a timed event's datetime
    /// falls inside the window, or an all-day span overlaps it (including
    /// spans that fully cover it). Ordered by (datetime, from_date)
    /// ascending.
    async fn events_overlapping(
        &self,
        page_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Event>>;

    /// Events anywhere in the site with `datetime >= from` or
    /// `from_date >= from`, ordered by (datetime, from_date) ascending and
    /// truncated to `limit`.
    async fn events_from(&self, from: NaiveDate, limit: i64) -> Result<Vec<Event>>;

    //
    // CONTENT ITEMS
    //

    /// Persist a new content item. Fails on duplicate id.
    async fn insert_item(&self, item: ContentItem) -> Result<ContentItem>;

    /// Items of one kind owned by a page, ordered by position. This is the
    /// sibling scope item positions are planned over.
    async fn items_in_scope(&self, page_id: &str, kind: ContentKind) -> Result<Vec<ContentItem>>;

    /// Apply a position plan to content items.
    async fn apply_item_positions(&self, plan: Vec<(String, i64)>) -> Result<()>;

    /// Items of one kind owned by a page, ordered as requested and
    /// truncated to `limit`.
    async fn items_for(
        &self,
        kind: ContentKind,
        page_id: &str,
        order: ContentOrder,
        limit: i64,
    ) -> Result<Vec<ContentItem>>;

    /// All items owned by a page, any kind, position order.
    async fn items_for_page(&self, page_id: &str) -> Result<Vec<ContentItem>>;

    //
    // COMMENTS
    //

    /// Persist a new comment.
    async fn insert_comment(&self, comment: Comment) -> Result<Comment>;

    /// Update a comment's moderation status and return the updated record.
    async fn set_comment_status(&self, id: &str, status: ModerationStatus) -> Result<Comment>;

    /// Comments on one content item, oldest first.
    async fn comments_for_item(&self, item_id: &str) -> Result<Vec<Comment>>;

    //
    // PASSWORD RESETS
    //

    /// Persist a new password reset.
    async fn insert_reset(&self, reset: PasswordReset) -> Result<PasswordReset>;

    /// Look up a reset by its code; `Ok(None)` when absent.
    async fn reset_by_code(&self, code: &str) -> Result<Option<PasswordReset>>;

    /// Mark a reset redeemed.
    async fn mark_reset_used(&self, id: &str) -> Result<()>;

    //
    // CASCADE REMOVAL
    //

    /// Remove all components owned by the given pages.
    async fn remove_components_for_pages(&self, page_ids: &[String]) -> Result<u64>;

    /// Remove all events owned by the given pages.
    async fn remove_events_for_pages(&self, page_ids: &[String]) -> Result<u64>;

    /// Remove all content items owned by the given pages, returning the
    /// ids of the removed items (comment cleanup follows them).
    async fn remove_items_for_pages(&self, page_ids: &[String]) -> Result<Vec<String>>;

    /// Remove all comments on the given content items.
    async fn remove_comments_for_items(&self, item_ids: &[String]) -> Result<u64>;
}
