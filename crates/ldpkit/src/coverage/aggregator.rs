//! Two-pass coverage aggregation.
//!
//! The tally pass counts records into a [`CoverageSummary`] and attributes
//! each spec reference to coverage exactly once, using the first record that
//! names it. The detail pass walks the same records again to produce
//! per-method report entries; it claims nothing and counts nothing.

use super::dedup::RequirementTracker;
use super::summary::CoverageSummary;
use crate::requirement::{ApprovalStatus, ImplementationStatus, TestMethodRecord};
use serde::{Deserialize, Serialize};

/// Output of a tally pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Final counters
    pub summary: CoverageSummary,
    /// Names of manual tests, in record order
    pub manual_tests: Vec<String>,
    /// Names of client-only tests, in record order
    pub client_tests: Vec<String>,
}

/// State of one aggregation run.
///
/// A run is created over a record slice and consumed by [`Self::tally`], so
/// the same context can never count twice or be shared between runs.
#[derive(Debug)]
pub struct AggregationRun<'a> {
    records: &'a [TestMethodRecord],
    tracker: RequirementTracker,
    tally: Tally,
}

impl<'a> AggregationRun<'a> {
    /// Start a run over `records`
    #[must_use]
    pub fn new(records: &'a [TestMethodRecord]) -> Self {
        Self {
            records,
            tracker: RequirementTracker::new(),
            tally: Tally::default(),
        }
    }

    /// Run the tally pass to completion
    #[must_use]
    pub fn tally(mut self) -> Tally {
        for record in self.records {
            self.count(record);
        }

        let summary = &self.tally.summary;
        tracing::debug!(
            total_tests = summary.total_tests,
            implemented = summary.total_implemented,
            requirements = summary.requirements_covered,
            "coverage tally complete"
        );
        self.tally
    }

    fn count(&mut self, record: &TestMethodRecord) {
        let status = record.implementation;
        let summary = &mut self.tally.summary;

        summary.total_tests += 1;
        if record.enabled {
            if status.is_automated() {
                summary.total_implemented += 1;
            } else {
                summary.unimplemented += 1;
            }
        } else {
            summary.disabled += 1;
            summary.unimplemented += 1;
        }

        match status {
            ImplementationStatus::ClientOnly => {
                summary.client_only += 1;
                self.tally.client_tests.push(record.name.clone());
            }
            ImplementationStatus::Manual => {
                summary.manual += 1;
                self.tally.manual_tests.push(record.name.clone());
            }
            ImplementationStatus::Automated | ImplementationStatus::NotImplemented => {}
        }

        if !self.tracker.try_claim(&record.spec_ref) {
            return;
        }

        summary.requirements_covered += 1;
        // a record tagged with several levels counts toward each of them
        for &level in &record.levels {
            let counts = summary.level_mut(level);
            counts.total += 1;
            match status {
                ImplementationStatus::Automated => counts.implemented += 1,
                ImplementationStatus::NotImplemented => counts.not_implemented += 1,
                ImplementationStatus::ClientOnly | ImplementationStatus::Manual => {}
            }
        }
        match status {
            ImplementationStatus::Automated => summary.requirements_implemented += 1,
            ImplementationStatus::NotImplemented => summary.requirements_not_implemented += 1,
            ImplementationStatus::ClientOnly | ImplementationStatus::Manual => {}
        }
        match record.approval {
            ApprovalStatus::Pending => summary.pending += 1,
            ApprovalStatus::Approved => summary.approved += 1,
        }
    }
}

/// Compute the coverage summary of `records` in a fresh run
#[must_use]
pub fn compute_summary(records: &[TestMethodRecord]) -> CoverageSummary {
    AggregationRun::new(records).tally().summary
}

/// Per-method report entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementDetail {
    /// Owning module
    pub module: String,
    /// Method name
    pub name: String,
    /// Description
    pub description: String,
    /// Group tags
    pub groups: Vec<String>,
    /// Whether the test is enabled
    pub enabled: bool,
    /// Reference link to the normative clause
    pub spec_ref: String,
    /// Implementation classification
    pub implementation: ImplementationStatus,
    /// Approval classification
    pub approval: ApprovalStatus,
}

impl From<&TestMethodRecord> for RequirementDetail {
    fn from(record: &TestMethodRecord) -> Self {
        Self {
            module: record.module.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            groups: record.groups.clone(),
            enabled: record.enabled,
            spec_ref: record.spec_ref.clone(),
            implementation: record.implementation,
            approval: record.approval,
        }
    }
}

/// Detail pass over the records a summary was computed from.
///
/// `summary` must come from a tally of the same `records`.
///
/// # Panics
///
/// In debug builds, when `summary.total_tests` differs from `records.len()`.
#[must_use]
pub fn build_details(records: &[TestMethodRecord], summary: &CoverageSummary) -> Vec<RequirementDetail> {
    debug_assert_eq!(
        summary.total_tests,
        records.len(),
        "detail pass must walk the records of its summary"
    );
    records.iter().map(RequirementDetail::from).collect()
}
