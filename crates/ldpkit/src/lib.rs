//! ldpkit: LDP Conformance Toolkit
//!
//! Two independent pieces of a Linked Data Platform conformance harness:
//!
//! - **Coverage**: turn requirement-tagged test methods into deduplicated
//!   per-level statistics (how many MUST/SHOULD/MAY clauses are covered,
//!   implemented, pending review, manual-only, ...).
//! - **Headers**: split and resolve `Link` headers returned by a server under
//!   test, and check `Preference-Applied` acknowledgements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  TestModule ──► extract_records ──► AggregationRun ──► Report   │
//! │  (catalog)        (records)          (tally+details)   Model    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Link: ──► split_links ──► LinkValue ──► resolve_if_relative    │
//! │  Preference-Applied: ──► has_return_representation              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ldpkit::{compute_summary, RequirementLevel, TestMethodRecord};
//!
//! let records = vec![
//!     TestMethodRecord::new("BasicContainerTest", "testA", "spec#4.1.1")
//!         .with_level(RequirementLevel::Must),
//!     TestMethodRecord::new("BasicContainerTest", "testB", "spec#4.1.1")
//!         .with_level(RequirementLevel::Must),
//! ];
//! let summary = compute_summary(&records);
//! assert_eq!(summary.total_tests, 2);
//! assert_eq!(summary.requirements_covered, 1);
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod catalog;
pub mod coverage;
pub mod link;
pub mod prefer;
pub mod report;
mod requirement;
mod result;
pub mod vocab;

pub use catalog::{
    extract_records, CatalogModule, MethodDescriptor, SpecAnnotation, SuiteCatalog, TestAnnotation,
    TestModule, LDP_MODULE_ORDER,
};
pub use coverage::{
    build_details, compute_summary, AggregationRun, CoverageSummary, LevelCounts,
    RequirementDetail, RequirementTracker, Tally,
};
pub use link::{
    contains_link, first_link_for_relation, resolve_if_relative, split_links, LinkHeader,
    LinkValue,
};
pub use prefer::{check_preference_applied, has_return_representation};
pub use report::{build_report_model, ReportModel};
pub use requirement::{ApprovalStatus, ImplementationStatus, RequirementLevel, TestMethodRecord};
pub use result::{LdpError, LdpResult};
pub use vocab::InteractionModel;
