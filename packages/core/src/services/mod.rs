//! Business Services
//!
//! This module contains the core business logic services:
//!
//! - `PageService` - tree structure, sibling ordering, cascading destroy
//! - `PermissionChecker` - tier-based visibility and edit checks
//! - `ScheduleService` - month windows and future feeds for events
//! - `SnippetResolver` - turns component configuration into content slices
//! - `AccountService` / `ModerationService` - reset and comment flows that
//!   call the external collaborators after their own state commits
//!
//! Services coordinate between the store and application logic; the
//! excluded controller layer calls them after session verification.

pub mod account;
pub mod error;
pub mod moderation;
pub mod ordering;
pub mod page_service;
pub mod permissions;
pub mod schedule;
pub mod snippets;

mod page_service_tree_test;
mod permissions_test;

pub use account::AccountService;
pub use error::ServiceError;
pub use moderation::ModerationService;
pub use ordering::Orderable;
pub use page_service::PageService;
pub use permissions::PermissionChecker;
pub use schedule::{ScheduleService, DEFAULT_FUTURE_LIMIT};
pub use snippets::{Snippet, SnippetResolver};
