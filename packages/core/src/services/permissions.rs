//! Permission / Visibility Model
//!
//! Every page declares the minimum [`Tier`] required to view and to edit
//! it; the checker compares a requester's tier against those minimums
//! under the fixed ordering Public < Members < Admin. Checks are pure;
//! the listing queries walk the store in tree order.
//!
//! Session verification is an external collaborator: by the time this
//! model is consulted the requester's tier is already known, with
//! unauthenticated requesters at `Tier::Public`.

use crate::models::{Page, Tier};
use crate::services::error::ServiceError;
use crate::store::ContentStore;
use std::sync::Arc;

/// Tier-based visibility and edit checks over the page tree.
#[derive(Clone)]
pub struct PermissionChecker {
    store: Arc<dyn ContentStore>,
}

impl PermissionChecker {
    /// Create a new checker over a store
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Whether `tier` may view `page`.
    ///
    /// Monotonic in tier: if a tier may view a page, every higher tier
    /// may too.
    pub fn can_view(page: &Page, tier: Tier) -> bool {
        tier.satisfies(page.viewable_by)
    }

    /// Whether `tier` may edit `page`
    pub fn can_edit(page: &Page, tier: Tier) -> bool {
        tier.satisfies(page.editable_by)
    }

    /// Fetch a page, failing with `PermissionDenied` unless `tier` may
    /// view it
    pub async fn require_view(&self, page_id: &str, tier: Tier) -> Result<Page, ServiceError> {
        let page = self.fetch(page_id).await?;
        if Self::can_view(&page, tier) {
            Ok(page)
        } else {
            tracing::debug!("Denied view of page '{}' to tier {}", page_id, tier);
            Err(ServiceError::permission_denied("view", page_id))
        }
    }

    /// Fetch a page, failing with `PermissionDenied` unless `tier` may
    /// edit it
    pub async fn require_edit(&self, page_id: &str, tier: Tier) -> Result<Page, ServiceError> {
        let page = self.fetch(page_id).await?;
        if Self::can_edit(&page, tier) {
            Ok(page)
        } else {
            tracing::debug!("Denied edit of page '{}' to tier {}", page_id, tier);
            Err(ServiceError::permission_denied("edit", page_id))
        }
    }

    /// Every page `tier` may view, in tree order
    pub async fn list_viewable(&self, tier: Tier) -> Result<Vec<Page>, ServiceError> {
        let mut pages = self.store.all_pages().await?;
        pages.retain(|p| Self::can_view(p, tier));
        Ok(pages)
    }

    /// Every page `tier` may edit, in tree order
    pub async fn list_editable(&self, tier: Tier) -> Result<Vec<Page>, ServiceError> {
        let mut pages = self.store.all_pages().await?;
        pages.retain(|p| Self::can_edit(p, tier));
        Ok(pages)
    }

    async fn fetch(&self, page_id: &str) -> Result<Page, ServiceError> {
        self.store
            .page(page_id)
            .await?
            .ok_or_else(|| ServiceError::page_not_found(page_id))
    }
}
