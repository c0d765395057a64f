//! Property-based tests for scoring
//!
//! These tests verify invariants that should hold for all inputs:
//! - Aggregation is deterministic and order-independent
//! - A non-positive maximum never divides
//! - The total is the rounded sum of contributions
//! - Grades never decrease as the total grows

use ecoscore::scoring::{percent_achieved, round_one_decimal, CATEGORY_WEIGHT};
use ecoscore::{compute_summary, overall, Category, Entry, Grade, PointsValue};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Whole-number points keep floating point sums exact
fn entry() -> impl Strategy<Value = Entry> {
    (category(), 0u32..500, 0u32..500).prop_map(|(category, max, achieved)| {
        Entry::new(category, "indicator", max as f64, achieved as f64, "")
    })
}

proptest! {
    #[test]
    fn prop_summary_is_deterministic(entries in prop::collection::vec(entry(), 0..30)) {
        prop_assert_eq!(compute_summary(&entries), compute_summary(&entries));
    }

    #[test]
    fn prop_summary_ignores_entry_order(entries in prop::collection::vec(entry(), 0..30)) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(compute_summary(&entries), compute_summary(&reversed));
    }

    #[test]
    fn prop_one_row_per_category_present(entries in prop::collection::vec(entry(), 0..30)) {
        let present: BTreeSet<Category> = entries.iter().map(|e| e.category).collect();
        let summary = compute_summary(&entries);
        prop_assert_eq!(summary.len(), present.len());
        prop_assert_eq!(overall(&summary).is_none(), entries.is_empty());
    }

    #[test]
    fn prop_non_positive_max_gives_zero(max in -1000.0f64..=0.0, achieved in -1000.0f64..1000.0) {
        prop_assert_eq!(percent_achieved(achieved, max), 0.0);

        let entries = vec![Entry::new(Category::Ecology, "indicator", max, achieved, "")];
        let summary = compute_summary(&entries);
        let row = summary.get(Category::Ecology).unwrap();
        prop_assert_eq!(row.contribution, 0.0);
    }

    #[test]
    fn prop_total_is_rounded_sum(entries in prop::collection::vec(entry(), 1..30)) {
        let summary = compute_summary(&entries);
        let result = overall(&summary).unwrap();

        let sum: f64 = summary.iter().map(|row| row.contribution).sum();
        prop_assert_eq!(result.total, round_one_decimal(sum));
        prop_assert_eq!(result.grade, Grade::from_total(result.total));

        for row in &summary {
            prop_assert_eq!(row.weight, CATEGORY_WEIGHT);
            prop_assert!(row.contribution >= 0.0);
        }
    }

    #[test]
    fn prop_grade_is_monotonic(a in -50.0f64..200.0, b in -50.0f64..200.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Grade::from_total(low) <= Grade::from_total(high));
    }

    #[test]
    fn prop_coerce_is_always_finite(text in ".*") {
        let value = PointsValue::from_input(&text);
        prop_assert!(value.coerce().is_finite());
    }
}
