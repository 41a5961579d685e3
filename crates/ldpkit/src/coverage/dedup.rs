//! Requirement dedup tracker.

use std::collections::HashSet;

/// Spec references already attributed to coverage within one run
#[derive(Debug, Default)]
pub struct RequirementTracker {
    claimed: HashSet<String>,
}

impl RequirementTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a spec reference.
    ///
    /// Returns `true` the first time `uri` is seen, `false` afterwards.
    pub fn try_claim(&mut self, uri: &str) -> bool {
        if self.claimed.contains(uri) {
            return false;
        }
        self.claimed.insert(uri.to_string())
    }

    /// Check whether a reference was claimed
    #[must_use]
    pub fn is_claimed(&self, uri: &str) -> bool {
        self.claimed.contains(uri)
    }

    /// Number of distinct references claimed
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Check if nothing was claimed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
