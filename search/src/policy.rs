//! Search policy types.

use tileslide_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tileslide_kernel::proof::hash::{canonical_hash, ContentHash};
use tileslide_kernel::proof::hash_domain::HashDomain;

/// Which children of an expansion re-enter the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReinsertionPolicy {
    /// Only the single best child of each expansion is pushed; its siblings
    /// stay visited but are never expanded. The search becomes a
    /// visited-guided greedy walk and can exhaust even when the goal is
    /// reachable. Default.
    #[default]
    BestChildOnly,
    /// Every newly generated child is pushed (textbook best-first search).
    AllChildren,
}

impl ReinsertionPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestChildOnly => "best_child_only",
            Self::AllChildren => "all_children",
        }
    }
}

impl std::fmt::Display for ReinsertionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReinsertionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_child_only" | "best-child-only" => Ok(Self::BestChildOnly),
            "all_children" | "all-children" => Ok(Self::AllChildren),
            other => Err(format!(
                "unknown reinsertion policy {other:?} (expected best-child-only or all-children)"
            )),
        }
    }
}

/// Search configuration.
///
/// There is no expansion budget: a run ends only when the goal
/// is popped or the frontier empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    pub reinsertion: ReinsertionPolicy,
}

impl SearchPolicy {
    /// The full best-first alternate mode.
    #[must_use]
    pub fn all_children() -> Self {
        Self {
            reinsertion: ReinsertionPolicy::AllChildren,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "reinsertion": self.reinsertion.as_str(),
        })
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}
