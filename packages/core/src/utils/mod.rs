//! Shared Utilities

pub mod slug;
