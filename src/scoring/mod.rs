//! Scoring engine: aggregation of entries and grade classification.
//!
//! Everything here is pure. Callers pass the entries explicitly and get fresh
//! results back; nothing is cached between calls.

pub mod grade;
pub mod summary;

pub use grade::{classify, Grade};
pub use summary::{
    compute_summary, overall, percent_achieved, round_one_decimal, CategorySummary,
    OverallResult, Summary, CATEGORY_WEIGHT,
};

/// Informational prompt shown instead of results when there are no entries
pub const EMPTY_PROMPT: &str = "Add indicators from the side panel to calculate results.";
