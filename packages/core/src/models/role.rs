//! Permission Tiers
//!
//! A page declares the *minimum* tier required to view or edit it; the
//! checker compares the requester's tier against that minimum under the
//! fixed ordering Public < Members < Admin. No other tiers exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered permission tier.
///
/// Unauthenticated requesters are always `Tier::Public`; session
/// verification happens before this model is consulted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Anyone, authenticated or not
    Public,
    /// Any authenticated user
    Members,
    /// Administrators only
    Admin,
}

impl Tier {
    /// Whether a requester at this tier satisfies a page's minimum tier
    pub fn satisfies(self, minimum: Tier) -> bool {
        self >= minimum
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Public => write!(f, "public"),
            Tier::Members => write!(f, "members"),
            Tier::Admin => write!(f, "admin"),
        }
    }
}
