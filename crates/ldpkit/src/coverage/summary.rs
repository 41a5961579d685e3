//! Coverage summary counters.

use crate::requirement::RequirementLevel;
use serde::{Deserialize, Serialize};

/// Requirement counts for one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    /// Distinct requirements at this level
    pub total: usize,
    /// Of those, first claimed by an automated test
    pub implemented: usize,
    /// Of those, first claimed by a not-implemented test
    pub not_implemented: usize,
}

/// Aggregate coverage of a test suite.
///
/// Produced by a finished [`super::AggregationRun`]; there is no public way
/// to mutate a summary after the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Every extracted record
    pub total_tests: usize,
    /// Enabled and automated
    pub total_implemented: usize,
    /// Disabled, or not automated
    pub unimplemented: usize,
    /// Disabled records
    pub disabled: usize,
    /// Client-only records
    pub client_only: usize,
    /// Manual records
    pub manual: usize,
    /// Distinct spec references
    pub requirements_covered: usize,
    /// Distinct references first claimed by an automated test
    pub requirements_implemented: usize,
    /// Distinct references first claimed by a not-implemented test
    pub requirements_not_implemented: usize,
    /// MUST requirements
    pub must: LevelCounts,
    /// SHOULD requirements
    pub should: LevelCounts,
    /// MAY requirements
    pub may: LevelCounts,
    /// Distinct references whose first test awaits review
    pub pending: usize,
    /// Distinct references whose first test is approved
    pub approved: usize,
}

impl CoverageSummary {
    /// Counts for a level
    #[must_use]
    pub const fn level(&self, level: RequirementLevel) -> LevelCounts {
        match level {
            RequirementLevel::Must => self.must,
            RequirementLevel::Should => self.should,
            RequirementLevel::May => self.may,
        }
    }

    pub(crate) fn level_mut(&mut self, level: RequirementLevel) -> &mut LevelCounts {
        match level {
            RequirementLevel::Must => &mut self.must,
            RequirementLevel::Should => &mut self.should,
            RequirementLevel::May => &mut self.may,
        }
    }

    /// Share of tests that are implemented (0.0 to 1.0)
    #[must_use]
    pub fn implemented_ratio(&self) -> f64 {
        if self.total_tests == 0 {
            return 0.0;
        }
        self.total_implemented as f64 / self.total_tests as f64
    }

    /// One-line summary
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} tests implemented ({:.1}%), {} requirements covered (MUST {}, SHOULD {}, MAY {})",
            self.total_implemented,
            self.total_tests,
            self.implemented_ratio() * 100.0,
            self.requirements_covered,
            self.must.total,
            self.should.total,
            self.may.total
        )
    }
}
