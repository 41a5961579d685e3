//! Property-based tests for ldpkit.
//!
//! Uses proptest to verify the aggregation and tokenizer invariants hold for
//! arbitrary inputs.

use ldpkit::{
    compute_summary, split_links, ApprovalStatus, ImplementationStatus, RequirementLevel,
    TestMethodRecord,
};
use proptest::prelude::*;

fn implementation() -> impl Strategy<Value = ImplementationStatus> {
    prop_oneof![
        Just(ImplementationStatus::Automated),
        Just(ImplementationStatus::NotImplemented),
        Just(ImplementationStatus::ClientOnly),
        Just(ImplementationStatus::Manual),
    ]
}

fn approval() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![Just(ApprovalStatus::Pending), Just(ApprovalStatus::Approved)]
}

fn level() -> impl Strategy<Value = RequirementLevel> {
    prop_oneof![
        Just(RequirementLevel::Must),
        Just(RequirementLevel::Should),
        Just(RequirementLevel::May),
    ]
}

prop_compose! {
    fn record()(
        name in "test[A-Z][a-z]{1,8}",
        clause in 0u8..6,
        enabled in any::<bool>(),
        implementation in implementation(),
        approval in approval(),
        levels in prop::collection::vec(level(), 0..3),
    ) -> TestMethodRecord {
        let mut record = TestMethodRecord::new("Module", name, format!("spec#{clause}"))
            .with_enabled(enabled)
            .with_implementation(implementation)
            .with_approval(approval);
        for level in levels {
            record = record.with_level(level);
        }
        record
    }
}

// === Aggregation Property Tests ===

proptest! {
    /// N records sharing one reference cover exactly one requirement,
    /// classified by the first of them.
    #[test]
    fn prop_shared_reference_counts_once(
        first in record(),
        rest in prop::collection::vec(record(), 0..8),
    ) {
        let records: Vec<TestMethodRecord> = std::iter::once(first.clone())
            .chain(rest)
            .map(|mut r| { r.spec_ref = "spec#shared".to_string(); r })
            .collect();
        let summary = compute_summary(&records);

        prop_assert_eq!(summary.requirements_covered, 1);
        prop_assert_eq!(summary.pending + summary.approved, 1);
        let expect_impl = usize::from(first.implementation == ImplementationStatus::Automated);
        prop_assert_eq!(summary.requirements_implemented, expect_impl);
        for level in RequirementLevel::ALL {
            prop_assert_eq!(summary.level(level).total, usize::from(first.has_level(level)));
        }
    }

    /// total_tests is the record count, whatever the statuses.
    #[test]
    fn prop_total_tests_is_record_count(records in prop::collection::vec(record(), 0..40)) {
        let summary = compute_summary(&records);
        prop_assert_eq!(summary.total_tests, records.len());
        prop_assert_eq!(summary.total_implemented + summary.unimplemented, records.len());
    }

    /// Disabled records never count as implemented.
    #[test]
    fn prop_disabled_never_implemented(records in prop::collection::vec(record(), 0..40)) {
        let disabled: Vec<TestMethodRecord> = records
            .into_iter()
            .map(|r| r.with_enabled(false))
            .collect();
        let summary = compute_summary(&disabled);
        prop_assert_eq!(summary.total_implemented, 0);
        prop_assert_eq!(summary.disabled, disabled.len());
        prop_assert_eq!(summary.unimplemented, disabled.len());
    }

    /// Requirement coverage equals the number of distinct references.
    #[test]
    fn prop_coverage_is_distinct_references(records in prop::collection::vec(record(), 0..40)) {
        let distinct: std::collections::HashSet<&str> =
            records.iter().map(|r| r.spec_ref.as_str()).collect();
        let summary = compute_summary(&records);
        prop_assert_eq!(summary.requirements_covered, distinct.len());
        prop_assert!(
            summary.requirements_implemented + summary.requirements_not_implemented
                <= summary.requirements_covered
        );
    }
}

// === Tokenizer Property Tests ===

proptest! {
    /// Joining with ", " and splitting again is stable.
    #[test]
    fn prop_tokenizer_round_trip(value in r#"[<>,; a-z="]{0,40}"#) {
        let first = split_links(&value);
        let second = split_links(&first.join(", "));
        prop_assert_eq!(first, second);
    }

    /// Never empty, always trimmed.
    #[test]
    fn prop_tokenizer_trimmed(value in "[<>, \ta-z]{0,40}") {
        let links = split_links(&value);
        prop_assert!(!links.is_empty());
        for link in &links {
            prop_assert_eq!(link.trim(), link.as_str());
        }
    }

    /// Well-formed links split into exactly one element each.
    #[test]
    fn prop_bracketed_commas_never_split(
        targets in prop::collection::vec("[a-z]{1,5}(,[a-z]{1,5}){0,3}", 1..6)
    ) {
        let header = targets
            .iter()
            .map(|t| format!("<http://example.com/{t}>; rel=\"item\""))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(split_links(&header).len(), targets.len());
    }
}
