//! Site Configuration
//!
//! Configuration is passed explicitly at construction time. In particular
//! the protected home page is an explicit configured identity, never a
//! magic numeric literal buried in a guard clause.

use serde::{Deserialize, Serialize};

/// Site-wide configuration handed to the page service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// The one page that may never be destroyed
    pub home_page_id: String,

    /// Public base URL, used when composing links in outbound mail
    pub base_url: String,
}

impl SiteConfig {
    pub fn new(home_page_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            home_page_id: home_page_id.into(),
            base_url: base_url.into(),
        }
    }
}
