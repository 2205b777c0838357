//! In-Memory Store
//!
//! Reference `ContentStore` backend holding every record in
//! `tokio::sync::RwLock`-guarded maps. Ordering is computed on read, so the
//! store stays deterministic without maintaining indexes. This is the
//! backend every test in the crate runs against; a database-backed
//! implementation plugs in behind the same trait.

use crate::models::{
    Comment, Component, ContentItem, ContentKind, ContentOrder, Event, MenuType, ModerationStatus,
    Page, PageUpdate, PasswordReset, ScopeKey,
};
use crate::store::ContentStore;
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct State {
    pages: HashMap<String, Page>,
    components: HashMap<String, Component>,
    events: HashMap<String, Event>,
    items: HashMap<String, ContentItem>,
    comments: HashMap<String, Comment>,
    resets: HashMap<String, PasswordReset>,
}

/// In-memory reference implementation of [`ContentStore`].
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_events(events: &mut Vec<Event>) {
    events.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()).then(a.id.cmp(&b.id)));
}

fn page_in_scope(page: &Page, scope: &ScopeKey) -> bool {
    match scope {
        ScopeKey::TopLevel(menu) => page.parent_id.is_none() && page.menu == *menu,
        ScopeKey::Children(parent) => page.parent_id.as_deref() == Some(parent.as_str()),
        // Component scopes never hold pages
        ScopeKey::PageComponents(_) => false,
    }
}

/// Depth-first traversal in position order, roots of `menu` first.
fn collect_tree(state: &State, menu: MenuType, out: &mut Vec<Page>) {
    let mut roots: Vec<&Page> = state
        .pages
        .values()
        .filter(|p| p.parent_id.is_none() && p.menu == menu)
        .collect();
    roots.sort_by_key(|p| (p.position, p.id.clone()));

    fn descend(state: &State, page: &Page, out: &mut Vec<Page>) {
        out.push(page.clone());
        let mut children: Vec<&Page> = state
            .pages
            .values()
            .filter(|p| p.parent_id.as_deref() == Some(page.id.as_str()))
            .collect();
        children.sort_by_key(|p| (p.position, p.id.clone()));
        for child in children {
            descend(state, child, out);
        }
    }

    for root in roots {
        descend(state, root, out);
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn insert_page(&self, page: Page) -> Result<Page> {
        let mut state = self.state.write().await;
        if state.pages.contains_key(&page.id) {
            bail!("duplicate page id: {}", page.id);
        }
        state.pages.insert(page.id.clone(), page.clone());
        Ok(page)
    }

    async fn page(&self, id: &str) -> Result<Option<Page>> {
        let state = self.state.read().await;
        Ok(state.pages.get(id).cloned())
    }

    async fn update_page(&self, id: &str, update: PageUpdate) -> Result<Page> {
        let mut state = self.state.write().await;
        let Some(page) = state.pages.get_mut(id) else {
            bail!("page not found: {id}");
        };
        update.apply(page);
        Ok(page.clone())
    }

    async fn set_page_scope(
        &self,
        id: &str,
        parent_id: Option<String>,
        menu: MenuType,
    ) -> Result<Page> {
        let mut state = self.state.write().await;
        let Some(page) = state.pages.get_mut(id) else {
            bail!("page not found: {id}");
        };
        page.parent_id = parent_id;
        page.menu = menu;
        Ok(page.clone())
    }

    async fn pages_in_scope(&self, scope: &ScopeKey) -> Result<Vec<Page>> {
        let state = self.state.read().await;
        let mut pages: Vec<Page> = state
            .pages
            .values()
            .filter(|p| page_in_scope(p, scope))
            .cloned()
            .collect();
        pages.sort_by_key(|p| (p.position, p.id.clone()));
        Ok(pages)
    }

    async fn all_pages(&self) -> Result<Vec<Page>> {
        let state = self.state.read().await;
        let mut pages = Vec::with_capacity(state.pages.len());
        collect_tree(&state, MenuType::Primary, &mut pages);
        collect_tree(&state, MenuType::Secondary, &mut pages);
        Ok(pages)
    }

    async fn apply_page_positions(&self, plan: Vec<(String, i64)>) -> Result<()> {
        let mut state = self.state.write().await;
        for (id, position) in plan {
            let Some(page) = state.pages.get_mut(&id) else {
                bail!("page not found while renumbering: {id}");
            };
            page.position = position;
        }
        Ok(())
    }

    async fn remove_pages(&self, ids: &[String]) -> Result<u64> {
        let mut state = self.state.write().await;
        let mut removed = 0;
        for id in ids {
            if state.pages.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn insert_component(&self, component: Component) -> Result<Component> {
        let mut state = self.state.write().await;
        if state.components.contains_key(&component.id) {
            bail!("duplicate component id: {}", component.id);
        }
        state
            .components
            .insert(component.id.clone(), component.clone());
        Ok(component)
    }

    async fn component(&self, id: &str) -> Result<Option<Component>> {
        let state = self.state.read().await;
        Ok(state.components.get(id).cloned())
    }

    async fn components_for_page(&self, page_id: &str) -> Result<Vec<Component>> {
        let state = self.state.read().await;
        let mut components: Vec<Component> = state
            .components
            .values()
            .filter(|c| c.page_id == page_id)
            .cloned()
            .collect();
        components.sort_by_key(|c| (c.position, c.id.clone()));
        Ok(components)
    }

    async fn apply_component_positions(&self, plan: Vec<(String, i64)>) -> Result<()> {
        let mut state = self.state.write().await;
        for (id, position) in plan {
            let Some(component) = state.components.get_mut(&id) else {
                bail!("component not found while renumbering: {id}");
            };
            component.position = position;
        }
        Ok(())
    }

    async fn insert_event(&self, event: Event) -> Result<Event> {
        let mut state = self.state.write().await;
        if state.events.contains_key(&event.id) {
            bail!("duplicate event id: {}", event.id);
        }
        state.events.insert(event.id.clone(), event.clone());
        Ok(event)
    }

    async fn events_for_page(&self, page_id: &str) -> Result<Vec<Event>> {
        let state = self.state.read().await;
        let mut events: Vec<Event> = state
            .events
            .values()
            .filter(|e| e.page_id == page_id)
            .cloned()
            .collect();
        sort_events(&mut events);
        Ok(events)
    }

    async fn events_overlapping(
        &self,
        page_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Event>> {
        let window_start = from.and_hms_opt(0, 0, 0).unwrap_or_default();
        let window_end = to.and_hms_opt(0, 0, 0).unwrap_or_default();

        let state = self.state.read().await;
        let mut events: Vec<Event> = state
            .events
            .values()
            .filter(|e| e.page_id == page_id)
            .filter(|e| {
                // Interval intersection: a span fully covering the window
                // counts just like one ending or starting inside it.
                e.datetime
                    .is_some_and(|dt| dt >= window_start && dt <= window_end)
                    || e.from_date
                        .is_some_and(|f| f <= to && e.to_date.unwrap_or(f) >= from)
            })
            .cloned()
            .collect();
        sort_events(&mut events);
        Ok(events)
    }

    async fn events_from(&self, from: NaiveDate, limit: i64) -> Result<Vec<Event>> {
        let from_dt = from.and_hms_opt(0, 0, 0).unwrap_or_default();

        let state = self.state.read().await;
        let mut events: Vec<Event> = state
            .events
            .values()
            .filter(|e| {
                e.datetime.is_some_and(|dt| dt >= from_dt)
                    || e.from_date.is_some_and(|d| d >= from)
            })
            .cloned()
            .collect();
        sort_events(&mut events);
        events.truncate(limit.max(0) as usize);
        Ok(events)
    }

    async fn insert_item(&self, item: ContentItem) -> Result<ContentItem> {
        let mut state = self.state.write().await;
        if state.items.contains_key(&item.id) {
            bail!("duplicate content item id: {}", item.id);
        }
        state.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn items_in_scope(&self, page_id: &str, kind: ContentKind) -> Result<Vec<ContentItem>> {
        let state = self.state.read().await;
        let mut items: Vec<ContentItem> = state
            .items
            .values()
            .filter(|i| i.page_id == page_id && i.kind == kind)
            .cloned()
            .collect();
        items.sort_by_key(|i| (i.position, i.id.clone()));
        Ok(items)
    }

    async fn apply_item_positions(&self, plan: Vec<(String, i64)>) -> Result<()> {
        let mut state = self.state.write().await;
        for (id, position) in plan {
            let Some(item) = state.items.get_mut(&id) else {
                bail!("content item not found while renumbering: {id}");
            };
            item.position = position;
        }
        Ok(())
    }

    async fn items_for(
        &self,
        kind: ContentKind,
        page_id: &str,
        order: ContentOrder,
        limit: i64,
    ) -> Result<Vec<ContentItem>> {
        let state = self.state.read().await;
        let mut items: Vec<ContentItem> = state
            .items
            .values()
            .filter(|i| i.kind == kind && i.page_id == page_id)
            .cloned()
            .collect();

        match order {
            ContentOrder::CreatedDesc => {
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)))
            }
            ContentOrder::CreatedAsc => {
                items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
            }
            ContentOrder::TitleDesc => {
                items.sort_by(|a, b| b.title.cmp(&a.title).then(a.id.cmp(&b.id)))
            }
            ContentOrder::TitleAsc => {
                items.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)))
            }
        }
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    async fn items_for_page(&self, page_id: &str) -> Result<Vec<ContentItem>> {
        let state = self.state.read().await;
        let mut items: Vec<ContentItem> = state
            .items
            .values()
            .filter(|i| i.page_id == page_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| (i.position, i.id.clone()));
        Ok(items)
    }

    async fn insert_comment(&self, comment: Comment) -> Result<Comment> {
        let mut state = self.state.write().await;
        if state.comments.contains_key(&comment.id) {
            bail!("duplicate comment id: {}", comment.id);
        }
        state.comments.insert(comment.id.clone(), comment.clone());
        Ok(comment)
    }

    async fn set_comment_status(&self, id: &str, status: ModerationStatus) -> Result<Comment> {
        let mut state = self.state.write().await;
        let Some(comment) = state.comments.get_mut(id) else {
            bail!("comment not found: {id}");
        };
        comment.status = status;
        Ok(comment.clone())
    }

    async fn comments_for_item(&self, item_id: &str) -> Result<Vec<Comment>> {
        let state = self.state.read().await;
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.item_id == item_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn insert_reset(&self, reset: PasswordReset) -> Result<PasswordReset> {
        let mut state = self.state.write().await;
        state.resets.insert(reset.id.clone(), reset.clone());
        Ok(reset)
    }

    async fn reset_by_code(&self, code: &str) -> Result<Option<PasswordReset>> {
        let state = self.state.read().await;
        Ok(state
            .resets
            .values()
            .find(|r| r.reset_code == code)
            .cloned())
    }

    async fn mark_reset_used(&self, id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let Some(reset) = state.resets.get_mut(id) else {
            bail!("password reset not found: {id}");
        };
        reset.used = true;
        Ok(())
    }

    async fn remove_components_for_pages(&self, page_ids: &[String]) -> Result<u64> {
        let mut state = self.state.write().await;
        let before = state.components.len();
        state
            .components
            .retain(|_, c| !page_ids.contains(&c.page_id));
        Ok((before - state.components.len()) as u64)
    }

    async fn remove_events_for_pages(&self, page_ids: &[String]) -> Result<u64> {
        let mut state = self.state.write().await;
        let before = state.events.len();
        state.events.retain(|_, e| !page_ids.contains(&e.page_id));
        Ok((before - state.events.len()) as u64)
    }

    async fn remove_items_for_pages(&self, page_ids: &[String]) -> Result<Vec<String>> {
        let mut state = self.state.write().await;
        let removed: Vec<String> = state
            .items
            .values()
            .filter(|i| page_ids.contains(&i.page_id))
            .map(|i| i.id.clone())
            .collect();
        state.items.retain(|_, i| !page_ids.contains(&i.page_id));
        Ok(removed)
    }

    async fn remove_comments_for_items(&self, item_ids: &[String]) -> Result<u64> {
        let mut state = self.state.write().await;
        let before = state.comments.len();
        state
            .comments
            .retain(|_, c| !item_ids.contains(&c.item_id));
        Ok((before - state.comments.len()) as u64)
    }
}
