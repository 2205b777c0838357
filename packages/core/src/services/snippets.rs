//! Component-Snippet Resolution
//!
//! Turns a component's feed configuration into a bounded, ordered slice of
//! content for embedding in its page. Event feeds bypass the component's
//! `order`/`source_page` entirely and delegate to the scheduling model's
//! future-events feed; every other kind fetches content items from the
//! configured source page (or the owning page when no source is set).

use crate::models::{Component, ContentItem, Event};
use crate::services::error::ServiceError;
use crate::services::schedule::ScheduleService;
use crate::store::ContentStore;
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;

/// Resolved snippet content: one closed set of shapes, no runtime type
/// lookup by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Snippet {
    /// Future events, from the scheduling model
    Events(Vec<Event>),
    /// Content items of one kind from the source page
    Items(Vec<ContentItem>),
}

/// Resolves component feed configuration into content slices.
#[derive(Clone)]
pub struct SnippetResolver {
    store: Arc<dyn ContentStore>,
    schedule: ScheduleService,
}

impl SnippetResolver {
    /// Create a new resolver over a store
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let schedule = ScheduleService::new(store.clone());
        Self { store, schedule }
    }

    /// Resolve a component's snippet as of today
    pub async fn resolve(&self, component: &Component) -> Result<Snippet, ServiceError> {
        self.resolve_at(component, Utc::now().date_naive()).await
    }

    /// Resolve a component by id
    pub async fn resolve_by_id(&self, component_id: &str) -> Result<Snippet, ServiceError> {
        let component = self
            .store
            .component(component_id)
            .await?
            .ok_or_else(|| ServiceError::component_not_found(component_id))?;
        self.resolve(&component).await
    }

    /// Resolve a component's snippet as of the given day.
    ///
    /// # Errors
    ///
    /// `MisconfiguredComponent` when no snippet kind is configured. The
    /// invariant is checked here, at resolution time, not at save time.
    pub async fn resolve_at(
        &self,
        component: &Component,
        today: NaiveDate,
    ) -> Result<Snippet, ServiceError> {
        let Some(kind) = component.snippet_kind else {
            return Err(ServiceError::misconfigured_component(
                &component.id,
                "no snippet kind configured",
            ));
        };

        match kind.content_kind() {
            // Event feeds ignore order and source: always the future feed.
            None => {
                let events = self
                    .schedule
                    .future_events(today.year(), today.month(), Some(component.limit))
                    .await?;
                Ok(Snippet::Events(events))
            }
            Some(content_kind) => {
                let source = component
                    .source_page
                    .as_deref()
                    .unwrap_or(&component.page_id);
                let items = self
                    .store
                    .items_for(content_kind, source, component.order, component.limit)
                    .await?;
                Ok(Snippet::Items(items))
            }
        }
    }
}
