//! Persistence Layer
//!
//! The [`ContentStore`] trait abstracts record persistence so the services
//! never touch a concrete backend. Position updates travel as whole plans
//! (`apply_*_positions`) so a transactional backend can wrap one reindex in
//! one transaction; the core performs no locking of its own.
//!
//! [`MemoryStore`] is the reference backend: deterministic ordering, no
//! I/O, used by every test in the crate.

mod content_store;
mod memory;

pub use content_store::ContentStore;
pub use memory::MemoryStore;
