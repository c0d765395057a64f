//! Per-category aggregation of entries.

use serde::Serialize;
use std::collections::BTreeMap;

use super::grade::Grade;
use crate::catalog::Category;
use crate::entry::Entry;

/// Weight of every category in the overall total, in percent.
///
/// Fixed at an equal split across the four categories, regardless of how many
/// indicators or points a category holds.
pub const CATEGORY_WEIGHT: f64 = 25.0;

/// Aggregated scores of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub sum_max_points: f64,
    pub sum_achieved_points: f64,
    pub percent_achieved: f64,
    pub weight: f64,
    /// Share of the overall total, `percent_achieved * weight / 100`
    pub contribution: f64,
}

impl CategorySummary {
    /// Build a summary row from the sanitized sums of a category
    pub fn from_sums(category: Category, sum_max_points: f64, sum_achieved_points: f64) -> Self {
        let percent_achieved = percent_achieved(sum_achieved_points, sum_max_points);
        Self {
            category,
            sum_max_points,
            sum_achieved_points,
            percent_achieved,
            weight: CATEGORY_WEIGHT,
            contribution: percent_achieved * CATEGORY_WEIGHT / 100.0,
        }
    }
}

/// Summary rows in category order, only for categories with entries
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Summary {
    rows: Vec<CategorySummary>,
}

impl Summary {
    pub fn rows(&self) -> &[CategorySummary] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, category: Category) -> Option<&CategorySummary> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Unrounded sum of all contributions
    pub fn total_contribution(&self) -> f64 {
        self.rows.iter().map(|row| row.contribution).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategorySummary> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a CategorySummary;
    type IntoIter = std::slice::Iter<'a, CategorySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Final score and grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallResult {
    /// Sum of contributions, rounded to one decimal
    pub total: f64,
    pub grade: Grade,
}

/// Pure function: percent of the maximum that was achieved.
///
/// Returns exactly 0 when `sum_max` is not positive instead of dividing by zero.
pub fn percent_achieved(sum_achieved: f64, sum_max: f64) -> f64 {
    if sum_max > 0.0 {
        sum_achieved / sum_max * 100.0
    } else {
        0.0
    }
}

/// Round to one decimal place from the exact binary value.
///
/// `24.95` is stored as `24.9499…` and rounds down. Exact ties such as `0.25`
/// go to the even digit.
///
/// ```
/// use ecoscore::scoring::round_one_decimal;
///
/// assert_eq!(round_one_decimal(24.95), 24.9);
/// assert_eq!(round_one_decimal(0.25), 0.2);
/// assert_eq!(round_one_decimal(0.75), 0.8);
/// ```
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Aggregate entries into one summary row per category that has entries.
///
/// Numeric fields are coerced here (non-numeric or missing values count as 0),
/// never when the entry is created. Pure: same entries, same summary.
///
/// # Examples
///
/// ```
/// use ecoscore::catalog::Category;
/// use ecoscore::entry::Entry;
/// use ecoscore::scoring::compute_summary;
///
/// let entries = vec![Entry::new(Category::Compactness, "Absolute compactness", 20.0, 20.0, "")];
/// let summary = compute_summary(&entries);
/// let row = summary.get(Category::Compactness).unwrap();
/// assert_eq!(row.percent_achieved, 100.0);
/// assert_eq!(row.contribution, 25.0);
/// assert!(summary.get(Category::Ecology).is_none());
/// ```
pub fn compute_summary(entries: &[Entry]) -> Summary {
    let sums = entries
        .iter()
        .fold(BTreeMap::<Category, (f64, f64)>::new(), |mut acc, entry| {
            let slot = acc.entry(entry.category).or_insert((0.0, 0.0));
            slot.0 += entry.max_points.coerce();
            slot.1 += entry.achieved_points.coerce();
            acc
        });

    let rows = sums
        .into_iter()
        .map(|(category, (sum_max, sum_achieved))| {
            CategorySummary::from_sums(category, sum_max, sum_achieved)
        })
        .collect();

    Summary { rows }
}

/// Overall result of a summary, or `None` when there is nothing to grade
pub fn overall(summary: &Summary) -> Option<OverallResult> {
    if summary.is_empty() {
        return None;
    }
    let total = round_one_decimal(summary.total_contribution());
    Some(OverallResult {
        total,
        grade: Grade::from_total(total),
    })
}
