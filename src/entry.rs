//! User-entered indicator rows.
//!
//! Entries keep whatever the user typed into the numeric fields. Coercion to
//! numbers happens only when the entries are aggregated (see
//! [`crate::scoring::compute_summary`]), so an entry may hold text like `"n/a"`
//! until then.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, IndicatorDefinition};

/// Raw value of a numeric form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PointsValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    /// Any other JSON value (bool, array, object) read from an entries file
    Other(serde_json::Value),
}

impl PointsValue {
    /// Interpret text typed into a form field.
    ///
    /// Text that parses as a finite number becomes [`PointsValue::Number`];
    /// blank input is [`PointsValue::Missing`]; anything else is kept verbatim.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(input.to_string()),
        }
    }

    /// Numeric value used for aggregation. Never NaN, never infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ecoscore::entry::PointsValue;
    ///
    /// assert_eq!(PointsValue::Number(12.5).coerce(), 12.5);
    /// assert_eq!(PointsValue::Text(" 7 ".into()).coerce(), 7.0);
    /// assert_eq!(PointsValue::Text("n/a".into()).coerce(), 0.0);
    /// assert_eq!(PointsValue::Missing.coerce(), 0.0);
    /// ```
    pub fn coerce(&self) -> f64 {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
            Self::Missing | Self::Other(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

impl From<f64> for PointsValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PointsValue {
    fn from(value: &str) -> Self {
        Self::from_input(value)
    }
}

impl std::fmt::Display for PointsValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
            Self::Missing => Ok(()),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One user-submitted, scored instance of an indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub category: Category,
    /// Expected to name an indicator of `category`, not enforced
    pub indicator: String,
    #[serde(default)]
    pub max_points: PointsValue,
    #[serde(default)]
    pub achieved_points: PointsValue,
    #[serde(default)]
    pub comment: String,
}

impl Entry {
    pub fn new(
        category: Category,
        indicator: impl Into<String>,
        max_points: impl Into<PointsValue>,
        achieved_points: impl Into<PointsValue>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            category,
            indicator: indicator.into(),
            max_points: max_points.into(),
            achieved_points: achieved_points.into(),
            comment: comment.into(),
        }
    }
}

/// Form defaults for a catalog indicator
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub category: Category,
    pub indicator: String,
    pub max_points: f64,
    pub achieved_points: f64,
    pub comment: String,
}

impl EntryDraft {
    pub fn from_definition(def: &IndicatorDefinition) -> Self {
        Self {
            category: def.category,
            indicator: def.name.to_string(),
            max_points: def.max_points,
            achieved_points: 0.0,
            comment: def.default_comment(),
        }
    }

    pub fn into_entry(self) -> Entry {
        Entry::new(
            self.category,
            self.indicator,
            self.max_points,
            self.achieved_points,
            self.comment,
        )
    }
}
