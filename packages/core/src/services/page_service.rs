//! Page Tree Service
//!
//! CRUD, hierarchy queries, sibling ordering, and cascading destruction for
//! the page tree. The service plans every position change as a whole-scope
//! batch and hands it to the store in one call.
//!
//! # Hierarchy model
//!
//! - Children order within their parent; top-level pages order within
//!   their menu. Two top-level pages in different menus are never siblings.
//! - Destruction is recursive and depth-first: descendant content
//!   (components, events, content items, comments) goes before descendant
//!   pages, which go before the target page itself.
//! - The configured home page refuses destruction outright, before any
//!   cascading begins.

use crate::config::SiteConfig;
use crate::models::{Component, ContentItem, MenuType, Page, PageUpdate, ScopeKey};
use crate::services::error::ServiceError;
use crate::services::ordering::{plan_insert, plan_move, plan_remove, reindex};
use crate::store::ContentStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Service for page-tree structure and ordering.
#[derive(Clone)]
pub struct PageService {
    store: Arc<dyn ContentStore>,
    config: SiteConfig,
}

impl PageService {
    /// Create a new PageService over a store and site configuration
    pub fn new(store: Arc<dyn ContentStore>, config: SiteConfig) -> Self {
        Self { store, config }
    }

    /// Access the underlying store
    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    /// Create a page, assigning its position within its sibling scope.
    ///
    /// `desired_position` is clamped into the scope's valid range; `None`
    /// appends. Siblings at or after the slot shift up by one.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when title or name is empty
    /// - `PageNotFound` when the named parent does not exist
    pub async fn create_page(
        &self,
        page: Page,
        desired_position: Option<i64>,
    ) -> Result<Page, ServiceError> {
        page.validate()?;

        if let Some(parent_id) = &page.parent_id {
            if self.store.page(parent_id).await?.is_none() {
                return Err(ServiceError::page_not_found(parent_id));
            }
        }

        let scope = page.scope_key();
        let siblings = self.store.pages_in_scope(&scope).await?;
        let (assigned, plan) = plan_insert(&siblings, desired_position);

        // Insert first: a rejected insert must leave sibling positions
        // untouched.
        let mut page = page;
        page.position = assigned;
        let created = self.store.insert_page(page).await?;
        if !plan.is_empty() {
            self.store.apply_page_positions(plan).await?;
        }
        tracing::debug!(
            "Created page '{}' at position {} in {:?}",
            created.id,
            assigned,
            scope
        );
        Ok(created)
    }

    /// Fetch a page, failing when it does not exist
    pub async fn get_page(&self, id: &str) -> Result<Page, ServiceError> {
        self.store
            .page(id)
            .await?
            .ok_or_else(|| ServiceError::page_not_found(id))
    }

    /// Apply a sparse update to a page
    pub async fn update_page(&self, id: &str, update: PageUpdate) -> Result<Page, ServiceError> {
        let mut preview = self.get_page(id).await?;
        update.clone().apply(&mut preview);
        preview.validate()?;

        Ok(self.store.update_page(id, update).await?)
    }

    /// Ordered children of a page
    pub async fn children(&self, parent_id: &str) -> Result<Vec<Page>, ServiceError> {
        Ok(self
            .store
            .pages_in_scope(&ScopeKey::Children(parent_id.to_string()))
            .await?)
    }

    /// Ordered top-level pages of a menu
    pub async fn pages_menu(&self, menu: MenuType) -> Result<Vec<Page>, ServiceError> {
        Ok(self.store.pages_in_scope(&ScopeKey::TopLevel(menu)).await?)
    }

    /// All pages sharing a page's scope, in position order, the page
    /// itself included
    pub async fn siblings_of(&self, id: &str) -> Result<Vec<Page>, ServiceError> {
        let page = self.get_page(id).await?;
        Ok(self.store.pages_in_scope(&page.scope_key()).await?)
    }

    /// A page's siblings with the page itself excluded
    pub async fn peers_of(&self, id: &str) -> Result<Vec<Page>, ServiceError> {
        let mut siblings = self.siblings_of(id).await?;
        siblings.retain(|p| p.id != id);
        Ok(siblings)
    }

    /// A page's ancestors, nearest first.
    ///
    /// Stops if a cycle is detected rather than looping; a cyclic store is
    /// corrupt but must not hang the request.
    pub async fn ancestor_chain(&self, id: &str) -> Result<Vec<Page>, ServiceError> {
        let mut chain = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(id.to_string());

        let mut current = self.get_page(id).await?;
        while let Some(parent_id) = current.parent_id.clone() {
            if !seen.insert(parent_id.clone()) {
                tracing::warn!("Cycle detected in ancestor chain of page '{}'", id);
                break;
            }
            match self.store.page(&parent_id).await? {
                Some(parent) => {
                    chain.push(parent.clone());
                    current = parent;
                }
                None => break,
            }
        }
        Ok(chain)
    }

    /// Move a page to a new position within its current scope.
    ///
    /// # Errors
    ///
    /// `UnpersistedItem` when the page has no persisted identity; ordering
    /// operations are only defined over stored records.
    pub async fn move_page(&self, id: &str, new_position: i64) -> Result<(), ServiceError> {
        let page = self
            .store
            .page(id)
            .await?
            .ok_or_else(|| ServiceError::unpersisted_item(format!("move of page {id}")))?;

        let siblings = self.store.pages_in_scope(&page.scope_key()).await?;
        let plan = plan_move(&siblings, id, new_position)
            .ok_or_else(|| ServiceError::unpersisted_item(format!("page {id} not in scope")))?;
        if !plan.is_empty() {
            self.store.apply_page_positions(plan).await?;
        }
        Ok(())
    }

    /// Move a page into a new scope: another parent, or a (different) menu
    /// at top level.
    ///
    /// Removal from the old scope's sequence and insertion into the new
    /// one are two ordered sub-operations, so both scopes end dense.
    pub async fn reparent_page(
        &self,
        id: &str,
        new_parent: Option<String>,
        new_menu: Option<MenuType>,
        desired_position: Option<i64>,
    ) -> Result<Page, ServiceError> {
        let page = self
            .store
            .page(id)
            .await?
            .ok_or_else(|| ServiceError::unpersisted_item(format!("reparent of page {id}")))?;

        if let Some(parent_id) = &new_parent {
            if parent_id == id {
                return Err(ServiceError::circular_reparent(id, parent_id));
            }
            if self.store.page(parent_id).await?.is_none() {
                return Err(ServiceError::page_not_found(parent_id));
            }
            let parent_ancestors = self.ancestor_chain(parent_id).await?;
            if parent_ancestors.iter().any(|a| a.id == id) {
                return Err(ServiceError::circular_reparent(id, parent_id));
            }
        }

        // Close the gap in the old scope first.
        let old_scope = page.scope_key();
        let old_siblings = self.store.pages_in_scope(&old_scope).await?;
        if let Some(plan) = plan_remove(&old_siblings, id) {
            if !plan.is_empty() {
                self.store.apply_page_positions(plan).await?;
            }
        }

        let menu = new_menu.unwrap_or(page.menu);
        let moved = self
            .store
            .set_page_scope(id, new_parent.clone(), menu)
            .await?;

        // Insert into the new scope, excluding the page itself.
        let mut new_siblings = self.store.pages_in_scope(&moved.scope_key()).await?;
        new_siblings.retain(|p| p.id != id);
        let (assigned, mut plan) = plan_insert(&new_siblings, desired_position);
        plan.push((id.to_string(), assigned));
        self.store.apply_page_positions(plan).await?;

        tracing::debug!(
            "Reparented page '{}' under {:?} at position {}",
            id,
            new_parent,
            assigned
        );
        self.get_page(id).await
    }

    /// Destroy a page and everything underneath it.
    ///
    /// The protected-page check runs before any deletion: destroying the
    /// configured home page fails with `ProtectedPage` and leaves the
    /// store untouched, regardless of who asks. Otherwise descendants are
    /// collected depth-first and their owned content (comments, content
    /// items, events, components) is removed before the pages themselves;
    /// the surviving peers are then renumbered.
    pub async fn destroy_page(&self, id: &str) -> Result<(), ServiceError> {
        if id == self.config.home_page_id {
            return Err(ServiceError::protected_page(id));
        }
        let page = self.get_page(id).await?;
        let old_scope = page.scope_key();

        // Leaf-first page list: descendants before ancestors.
        let doomed = self.collect_subtree(id).await?;

        let item_ids = self.store.remove_items_for_pages(&doomed).await?;
        self.store.remove_comments_for_items(&item_ids).await?;
        self.store.remove_events_for_pages(&doomed).await?;
        self.store.remove_components_for_pages(&doomed).await?;
        let removed = self.store.remove_pages(&doomed).await?;

        let survivors = self.store.pages_in_scope(&old_scope).await?;
        let plan = reindex(&survivors);
        if !plan.is_empty() {
            self.store.apply_page_positions(plan).await?;
        }

        tracing::info!(
            "Destroyed page '{}' and {} descendant page(s), {} owned item(s)",
            id,
            removed.saturating_sub(1),
            item_ids.len()
        );
        Ok(())
    }

    /// Ids of a page's subtree in leaf-first (post-order) sequence.
    async fn collect_subtree(&self, id: &str) -> Result<Vec<String>, ServiceError> {
        let mut ordered = Vec::new();
        let mut stack = vec![id.to_string()];
        let mut seen: HashSet<String> = HashSet::new();

        // Pre-order walk, reversed at the end for leaf-first deletion.
        while let Some(current) = stack.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            ordered.push(current.clone());
            for child in self.children(&current).await? {
                stack.push(child.id);
            }
        }
        ordered.reverse();
        Ok(ordered)
    }

    //
    // COMPONENT ORDERING
    //

    /// Add a component to its owning page, assigning a position within the
    /// page's component scope.
    pub async fn add_component(
        &self,
        component: Component,
        desired_position: Option<i64>,
    ) -> Result<Component, ServiceError> {
        component.validate()?;
        if self.store.page(&component.page_id).await?.is_none() {
            return Err(ServiceError::page_not_found(&component.page_id));
        }

        let peers = self.store.components_for_page(&component.page_id).await?;
        let (assigned, plan) = plan_insert(&peers, desired_position);

        let mut component = component;
        component.position = assigned;
        let created = self.store.insert_component(component).await?;
        if !plan.is_empty() {
            self.store.apply_component_positions(plan).await?;
        }
        Ok(created)
    }

    /// Move a component within its owning page's scope
    pub async fn move_component(&self, id: &str, new_position: i64) -> Result<(), ServiceError> {
        let component = self
            .store
            .component(id)
            .await?
            .ok_or_else(|| ServiceError::unpersisted_item(format!("move of component {id}")))?;

        let peers = self.store.components_for_page(&component.page_id).await?;
        let plan = plan_move(&peers, id, new_position).ok_or_else(|| {
            ServiceError::unpersisted_item(format!("component {id} not in scope"))
        })?;
        if !plan.is_empty() {
            self.store.apply_component_positions(plan).await?;
        }
        Ok(())
    }

    /// Ordered components of a page
    pub async fn components_of(&self, page_id: &str) -> Result<Vec<Component>, ServiceError> {
        Ok(self.store.components_for_page(page_id).await?)
    }

    //
    // CONTENT ITEM ORDERING
    //

    /// Add a content item to its owning page, assigning a position within
    /// the page's per-kind item scope.
    ///
    /// Items of different kinds on the same page number independently.
    pub async fn add_item(
        &self,
        item: ContentItem,
        desired_position: Option<i64>,
    ) -> Result<ContentItem, ServiceError> {
        item.validate()?;
        if self.store.page(&item.page_id).await?.is_none() {
            return Err(ServiceError::page_not_found(&item.page_id));
        }

        let peers = self.store.items_in_scope(&item.page_id, item.kind).await?;
        let (assigned, plan) = plan_insert(&peers, desired_position);

        let mut item = item;
        item.position = assigned;
        let created = self.store.insert_item(item).await?;
        if !plan.is_empty() {
            self.store.apply_item_positions(plan).await?;
        }
        Ok(created)
    }

    /// Whether a page needs its sidebar rendered: it has children, has a
    /// parent, or carries components.
    pub async fn requires_sidebar(&self, id: &str) -> Result<bool, ServiceError> {
        let page = self.get_page(id).await?;
        if page.parent_id.is_some() {
            return Ok(true);
        }
        if !self.children(id).await?.is_empty() {
            return Ok(true);
        }
        Ok(!self.store.components_for_page(id).await?.is_empty())
    }
}
