//! Permalink Derivation
//!
//! Pages and events derive URL-safe permalinks from their names: lowercase,
//! with every run of non-alphanumeric characters collapsed to a single dash.

use regex::Regex;
use std::sync::OnceLock;

// Runs of anything outside [a-z0-9] collapse to one dash
const NON_SLUG_PATTERN: &str = r"[^a-z0-9]+";

/// Derive a URL-safe slug from a display name.
///
/// # Examples
///
/// ```
/// # use pagetree_core::utils::slug::slugify;
/// assert_eq!(slugify("This is a Test"), "this-is-a-test");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(name: &str) -> String {
    static NON_SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = NON_SLUG_REGEX.get_or_init(|| Regex::new(NON_SLUG_PATTERN).unwrap());

    re.replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
