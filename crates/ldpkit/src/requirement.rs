//! Requirement metadata attached to conformance test methods.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Normative strength of a specification clause (RFC 2119)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequirementLevel {
    /// An absolute requirement
    Must,
    /// Recommended, deviations must be understood and weighed
    Should,
    /// Truly optional
    May,
}

impl RequirementLevel {
    /// All levels in report order
    pub const ALL: [Self; 3] = [Self::Must, Self::Should, Self::May];

    /// Map a test group tag onto a level.
    ///
    /// Exact match only: `MUST_NOT_FOO` or `mustard` are not levels.
    #[must_use]
    pub fn from_group(group: &str) -> Option<Self> {
        match group {
            "MUST" => Some(Self::Must),
            "SHOULD" => Some(Self::Should),
            "MAY" => Some(Self::May),
            _ => None,
        }
    }

    /// Tag name as it appears in test groups
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Must => "MUST",
            Self::Should => "SHOULD",
            Self::May => "MAY",
        }
    }
}

impl fmt::Display for RequirementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a test method exercises its requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImplementationStatus {
    /// Runs unattended against a server
    Automated,
    /// Declared but no test body yet
    NotImplemented,
    /// Requirement applies to clients; servers cannot be tested
    ClientOnly,
    /// Needs a human to verify
    Manual,
}

impl ImplementationStatus {
    /// Check if status counts as implemented
    #[must_use]
    pub const fn is_automated(self) -> bool {
        matches!(self, Self::Automated)
    }

    /// Catalog spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automated => "AUTOMATED",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::ClientOnly => "CLIENT_ONLY",
            Self::Manual => "MANUAL",
        }
    }
}

impl fmt::Display for ImplementationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Working-group review state of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Awaiting review
    #[serde(rename = "WG_PENDING", alias = "PENDING")]
    Pending,
    /// Approved by the working group
    #[serde(rename = "WG_APPROVED", alias = "APPROVED")]
    Approved,
}

impl ApprovalStatus {
    /// Catalog spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "WG_PENDING",
            Self::Approved => "WG_APPROVED",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully annotated test method, normalized for aggregation.
///
/// Built once by [`crate::catalog::extract_records`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMethodRecord {
    /// Owning test module
    pub module: String,
    /// Method name
    pub name: String,
    /// Human readable description
    pub description: String,
    /// Raw group tags, including non-level groups
    pub groups: Vec<String>,
    /// Whether the test is enabled
    pub enabled: bool,
    /// Requirement levels found among the groups
    pub levels: BTreeSet<RequirementLevel>,
    /// Identifier of the normative clause
    pub spec_ref: String,
    /// Implementation classification
    pub implementation: ImplementationStatus,
    /// Approval classification
    pub approval: ApprovalStatus,
}

impl TestMethodRecord {
    /// Create an enabled, automated, approved record with no levels
    #[must_use]
    pub fn new(module: impl Into<String>, name: impl Into<String>, spec_ref: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            description: String::new(),
            groups: Vec::new(),
            enabled: true,
            levels: BTreeSet::new(),
            spec_ref: spec_ref.into(),
            implementation: ImplementationStatus::Automated,
            approval: ApprovalStatus::Approved,
        }
    }

    /// Add a requirement level (also recorded as a group tag)
    #[must_use]
    pub fn with_level(mut self, level: RequirementLevel) -> Self {
        if self.levels.insert(level) {
            self.groups.push(level.as_str().to_string());
        }
        self
    }

    /// Set the implementation status
    #[must_use]
    pub const fn with_implementation(mut self, status: ImplementationStatus) -> Self {
        self.implementation = status;
        self
    }

    /// Set the approval status
    #[must_use]
    pub const fn with_approval(mut self, status: ApprovalStatus) -> Self {
        self.approval = status;
        self
    }

    /// Set enablement
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check whether the record carries a level
    #[must_use]
    pub fn has_level(&self, level: RequirementLevel) -> bool {
        self.levels.contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod level_tests {
        use super::*;

        #[test]
        fn test_from_group_exact() {
            assert_eq!(RequirementLevel::from_group("MUST"), Some(RequirementLevel::Must));
            assert_eq!(RequirementLevel::from_group("SHOULD"), Some(RequirementLevel::Should));
            assert_eq!(RequirementLevel::from_group("MAY"), Some(RequirementLevel::May));
        }

        #[test]
        fn test_from_group_rejects_overlapping_names() {
            assert_eq!(RequirementLevel::from_group("MUST_NOT"), None);
            assert_eq!(RequirementLevel::from_group("MAYBE"), None);
            assert_eq!(RequirementLevel::from_group("must"), None);
            assert_eq!(RequirementLevel::from_group("MANUAL"), None);
        }

        #[test]
        fn test_level_serde_uppercase() {
            let json = serde_json::to_string(&RequirementLevel::Should).unwrap();
            assert_eq!(json, "\"SHOULD\"");
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn test_implementation_serde() {
            let status: ImplementationStatus =
                serde_json::from_str("\"NOT_IMPLEMENTED\"").unwrap();
            assert_eq!(status, ImplementationStatus::NotImplemented);
            assert_eq!(
                serde_json::to_string(&ImplementationStatus::ClientOnly).unwrap(),
                "\"CLIENT_ONLY\""
            );
        }

        #[test]
        fn test_approval_aliases() {
            let a: ApprovalStatus = serde_json::from_str("\"WG_PENDING\"").unwrap();
            let b: ApprovalStatus = serde_json::from_str("\"PENDING\"").unwrap();
            assert_eq!(a, b);
            assert!(serde_json::from_str::<ApprovalStatus>("\"WG_REJECTED\"").is_err());
        }

        #[test]
        fn test_is_automated() {
            assert!(ImplementationStatus::Automated.is_automated());
            assert!(!ImplementationStatus::Manual.is_automated());
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_builder() {
            let record = TestMethodRecord::new("BasicContainerTest", "testContainsLdpcUri", "spec#5.2.3.1")
                .with_level(RequirementLevel::Must)
                .with_level(RequirementLevel::Must)
                .with_implementation(ImplementationStatus::Manual)
                .with_enabled(false);
            assert_eq!(record.levels.len(), 1);
            assert_eq!(record.groups, vec!["MUST".to_string()]);
            assert!(record.has_level(RequirementLevel::Must));
            assert!(!record.enabled);
        }
    }
}
