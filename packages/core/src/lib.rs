//! PageTree Core Business Logic Layer
//!
//! This crate provides the domain core of a content-managed site: an
//! ordered hierarchical page tree, tier-based visibility, date-bound
//! content scheduling, and component-snippet resolution.
//!
//! # Architecture
//!
//! - **Dense sibling ordering**: siblings stay contiguously numbered from 1
//!   within a scope; every mutation ships as one position plan per scope
//! - **Weak tree links**: pages reference parents, ownership flows down
//!   only at destruction time (recursive, depth-first, home page protected)
//! - **Minimum-tier access**: pages declare the lowest tier allowed to view
//!   or edit; the checker compares under Public < Members < Admin
//! - **Store seam**: persistence sits behind the async [`store::ContentStore`]
//!   trait; [`store::MemoryStore`] is the reference backend
//! - **External collaborators**: mail and spam checking are traits invoked
//!   best-effort after the core's own state commits
//!
//! # Modules
//!
//! - [`models`] - Data structures (Page, Component, Event, etc.)
//! - [`store`] - Persistence trait and the in-memory backend
//! - [`services`] - Business services (PageService, PermissionChecker, etc.)
//! - [`external`] - Collaborator contracts (mailer, spam checker)
//! - [`config`] - Explicit construction-time configuration

pub mod config;
pub mod external;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::SiteConfig;
pub use models::*;
pub use services::*;
pub use store::{ContentStore, MemoryStore};
