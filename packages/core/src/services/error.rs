//! Service Layer Error Types
//!
//! One error enum covers the whole service layer. Every variant is
//! fail-fast: nothing in this core is safe to blindly retry (reordering
//! least of all), so no automatic retries exist anywhere.

use crate::models::ValidationError;
use thiserror::Error;

/// Service operation errors
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Attempted destruction of the configured home page
    #[error("Page {id} is protected and cannot be destroyed")]
    ProtectedPage { id: String },

    /// Ordering operation on an item with no persisted identity
    #[error("Ordering operation on unpersisted item: {context}")]
    UnpersistedItem { context: String },

    /// Feed component whose configuration cannot be resolved
    #[error("Component {component_id} is misconfigured: {reason}")]
    MisconfiguredComponent {
        component_id: String,
        reason: String,
    },

    /// Role check failure; surfaced, never retried, never escalated
    #[error("Permission denied: {action} on page {page_id}")]
    PermissionDenied { action: String, page_id: String },

    /// Page not found by id
    #[error("Page not found: {id}")]
    PageNotFound { id: String },

    /// Component not found by id
    #[error("Component not found: {id}")]
    ComponentNotFound { id: String },

    /// Reparenting a page underneath itself or one of its descendants
    #[error("Cannot move page {id} under its own descendant {target}")]
    CircularReparent { id: String, target: String },

    /// Validation failed for a record
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Store operation failed
    #[error("Store operation failed: {0}")]
    Store(#[from] anyhow::Error),
}

impl ServiceError {
    /// Create a protected page error
    pub fn protected_page(id: impl Into<String>) -> Self {
        Self::ProtectedPage { id: id.into() }
    }

    /// Create an unpersisted item error
    pub fn unpersisted_item(context: impl Into<String>) -> Self {
        Self::UnpersistedItem {
            context: context.into(),
        }
    }

    /// Create a misconfigured component error
    pub fn misconfigured_component(
        component_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MisconfiguredComponent {
            component_id: component_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(action: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self::PermissionDenied {
            action: action.into(),
            page_id: page_id.into(),
        }
    }

    /// Create a page not found error
    pub fn page_not_found(id: impl Into<String>) -> Self {
        Self::PageNotFound { id: id.into() }
    }

    /// Create a component not found error
    pub fn component_not_found(id: impl Into<String>) -> Self {
        Self::ComponentNotFound { id: id.into() }
    }

    /// Create a circular reparent error
    pub fn circular_reparent(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self::CircularReparent {
            id: id.into(),
            target: target.into(),
        }
    }
}
