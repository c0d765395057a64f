//! End-to-end scoring of a session: entries in, summary and grade out.

mod common;

use common::{entry, perfect_entries};
use ecoscore::scoring::EMPTY_PROMPT;
use ecoscore::{classify, compute_summary, overall, Category, Entry, Grade, PointsValue, Session};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_session_has_no_result() {
    let session = Session::new();
    let summary = session.summary();

    assert!(summary.is_empty());
    assert_eq!(session.overall(), None);
    assert_eq!(
        EMPTY_PROMPT,
        "Add indicators from the side panel to calculate results."
    );
}

#[test]
fn test_single_full_category_is_a_d() {
    let entries = vec![entry(Category::Compactness, "Absolute compactness", 20.0, 20.0)];
    let summary = compute_summary(&entries);

    assert_eq!(summary.len(), 1);
    let row = summary.get(Category::Compactness).unwrap();
    assert_eq!(row.sum_max_points, 20.0);
    assert_eq!(row.sum_achieved_points, 20.0);
    assert_eq!(row.percent_achieved, 100.0);
    assert_eq!(row.contribution, 25.0);
    assert!(summary.get(Category::Ecology).is_none());

    let result = overall(&summary).unwrap();
    assert_eq!(result.total, 25.0);
    assert_eq!(result.grade, Grade::D);
    assert_eq!(result.grade.label(), "D (Insufficient)");
}

#[test]
fn test_every_category_full_is_an_a() {
    let summary = compute_summary(&perfect_entries());

    assert_eq!(summary.len(), 4);
    for row in &summary {
        assert_eq!(row.percent_achieved, 100.0);
        assert_eq!(row.contribution, 25.0);
    }
    let result = overall(&summary).unwrap();
    assert_eq!(result.total, 100.0);
    assert_eq!(result.grade.label(), "A (Excellent)");
}

#[test]
fn test_zero_max_points_contributes_nothing() {
    let entries = vec![entry(Category::Ecology, "Air quality", 0.0, 10.0)];
    let summary = compute_summary(&entries);

    let row = summary.get(Category::Ecology).unwrap();
    assert_eq!(row.sum_achieved_points, 10.0);
    assert_eq!(row.percent_achieved, 0.0);
    assert_eq!(row.contribution, 0.0);
    assert_eq!(overall(&summary).unwrap().grade, Grade::E);
}

#[test]
fn test_over_achievement_is_not_clamped() {
    let entries = vec![entry(Category::Metabolism, "Renewable energy", 100.0, 150.0)];
    let summary = compute_summary(&entries);

    let row = summary.get(Category::Metabolism).unwrap();
    assert_eq!(row.percent_achieved, 150.0);
    assert_eq!(row.contribution, 37.5);
    assert_eq!(overall(&summary).unwrap().total, 37.5);

    // All four categories over-achieved push the total past 100
    let entries: Vec<Entry> = Category::ALL
        .iter()
        .map(|c| entry(*c, "x", 10.0, 20.0))
        .collect();
    let result = overall(&compute_summary(&entries)).unwrap();
    assert_eq!(result.total, 200.0);
    assert_eq!(result.grade, Grade::A);
}

#[test]
fn test_entries_in_same_category_are_summed() {
    let entries = vec![
        entry(Category::Cohesion, "Services and facilities", 40.0, 30.0),
        entry(Category::Compactness, "Absolute compactness", 20.0, 10.0),
        entry(Category::Cohesion, "Stay space per inhabitant", 60.0, 20.0),
    ];
    let summary = compute_summary(&entries);

    let categories: Vec<Category> = summary.iter().map(|row| row.category).collect();
    assert_eq!(categories, vec![Category::Compactness, Category::Cohesion]);

    let cohesion = summary.get(Category::Cohesion).unwrap();
    assert_eq!(cohesion.sum_max_points, 100.0);
    assert_eq!(cohesion.sum_achieved_points, 50.0);
    assert_eq!(cohesion.contribution, 12.5);
    assert_eq!(overall(&summary).unwrap().total, 25.0);
}

#[test]
fn test_non_numeric_points_count_as_zero() {
    let entries = vec![
        Entry::new(Category::Ecology, "Air quality", "forty", "n/a", ""),
        Entry::new(Category::Ecology, "Urban biodiversity", 20.0, PointsValue::Missing, ""),
        Entry::new(Category::Ecology, "Acoustic comfort", " 20 ", "10", ""),
    ];
    let summary = compute_summary(&entries);

    let row = summary.get(Category::Ecology).unwrap();
    assert_eq!(row.sum_max_points, 40.0);
    assert_eq!(row.sum_achieved_points, 10.0);
    assert_eq!(row.percent_achieved, 25.0);
    // The raw text stays on the entry
    assert_eq!(entries[0].max_points, PointsValue::Text("forty".to_string()));
}

#[test]
fn test_total_is_rounded_to_one_decimal() {
    let entries = vec![entry(Category::Compactness, "Absolute compactness", 3.0, 1.0)];
    let result = overall(&compute_summary(&entries)).unwrap();
    // 33.333...% of 25 = 8.333...
    assert_eq!(result.total, 8.3);
}

#[test]
fn test_grade_boundaries_are_closed_below() {
    assert_eq!(classify(90.0), "A (Excellent)");
    assert_eq!(classify(89.99), "B (Notable)");
    assert_eq!(classify(70.0), "B (Notable)");
    assert_eq!(classify(69.9), "C (Sufficient)");
    assert_eq!(classify(50.0), "C (Sufficient)");
    assert_eq!(classify(49.9), "D (Insufficient)");
    assert_eq!(classify(25.0), "D (Insufficient)");
    assert_eq!(classify(24.9), "E (Very insufficient)");
    assert_eq!(classify(-10.0), "E (Very insufficient)");
    assert_eq!(classify(250.0), "A (Excellent)");
}

#[test]
fn test_session_results_follow_new_entries() {
    let mut session = Session::new();
    session.add_entry(Category::Compactness, "Absolute compactness", 20.0, 20.0, "");
    assert_eq!(session.overall().unwrap().total, 25.0);

    session.add_entry(Category::Ecology, "Green space per inhabitant", 100.0, 100.0, "");
    let result = session.overall().unwrap();
    assert_eq!(result.total, 50.0);
    assert_eq!(result.grade, Grade::C);
    assert_eq!(session.len(), 2);
}

#[test]
fn test_total_below_band_edge_is_not_rounded_up() {
    let entries = vec![entry(Category::Compactness, "Absolute compactness", 100.0, 99.8)];
    let result = overall(&compute_summary(&entries)).unwrap();

    assert_eq!(result.total, 24.9);
    assert_eq!(result.grade.label(), "E (Very insufficient)");
}
