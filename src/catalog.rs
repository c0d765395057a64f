//! Static catalog of sustainability categories and indicators.
//!
//! The catalog is fixed at compile time: four categories (axes of the
//! ecological urbanism model), each with an ordered, non-empty list of
//! indicators. Nothing in the crate mutates it.
//!
//! # Examples
//!
//! ```
//! use ecoscore::catalog::{self, Category};
//!
//! let first = &catalog::indicators(Category::Compactness)[0];
//! assert_eq!(first.name, "Absolute compactness");
//! assert_eq!(first.default_comment(), "Reference: ≥ 50%");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One of the four fixed sustainability axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "eje1")]
    Compactness,
    #[serde(rename = "eje2")]
    Ecology,
    #[serde(rename = "eje3")]
    Metabolism,
    #[serde(rename = "eje4")]
    Cohesion,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Compactness,
        Category::Ecology,
        Category::Metabolism,
        Category::Cohesion,
    ];

    /// Short key used in entry files and on the command line
    pub const fn key(self) -> &'static str {
        match self {
            Self::Compactness => "eje1",
            Self::Ecology => "eje2",
            Self::Metabolism => "eje3",
            Self::Cohesion => "eje4",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compactness => "Axis 1 - Compactness and functionality",
            Self::Ecology => "Axis 2 - Ecological urbanism",
            Self::Metabolism => "Axis 3 - Urban metabolism",
            Self::Cohesion => "Axis 4 - Cohesion and livability",
        }
    }

    /// Position in [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Compactness => 0,
            Self::Ecology => 1,
            Self::Metabolism => 2,
            Self::Cohesion => 3,
        }
    }

    /// Parse a category from its key (`eje1`), number (`1`) or full label.
    pub fn from_key(input: &str) -> Result<Self> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.key().eq_ignore_ascii_case(needle)
                    || category.label().eq_ignore_ascii_case(needle)
                    || (category.index() + 1).to_string() == needle
            })
            .ok_or_else(|| Error::UnknownCategory(input.to_string()))
    }

    /// Next category, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named metric within a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorDefinition {
    pub category: Category,
    pub name: &'static str,
    /// Passing criterion, shown to the user but never evaluated
    pub reference_threshold: &'static str,
    /// Default ceiling for this indicator (always > 0)
    pub max_points: f64,
}

impl IndicatorDefinition {
    const fn new(
        category: Category,
        name: &'static str,
        reference_threshold: &'static str,
        max_points: f64,
    ) -> Self {
        Self {
            category,
            name,
            reference_threshold,
            max_points,
        }
    }

    /// Comment pre-filled in the entry form
    pub fn default_comment(&self) -> String {
        format!("Reference: {}", self.reference_threshold)
    }
}

use Category::{Cohesion, Compactness, Ecology, Metabolism};

const COMPACTNESS: &[IndicatorDefinition] = &[
    IndicatorDefinition::new(Compactness, "Absolute compactness", "≥ 50%", 20.0),
    IndicatorDefinition::new(Compactness, "Corrected compactness", "≥ 50%", 20.0),
    IndicatorDefinition::new(
        Compactness,
        "Street accessibility",
        "≥ 90% of street length with sidewalk ≥ 3 m",
        60.0,
    ),
    IndicatorDefinition::new(
        Compactness,
        "Street space for pedestrians",
        "≥ 60% of street space pedestrian",
        50.0,
    ),
    IndicatorDefinition::new(Compactness, "Street proportion (H/D)", "H/D < 2", 30.0),
];

const ECOLOGY: &[IndicatorDefinition] = &[
    IndicatorDefinition::new(
        Ecology,
        "Green space per inhabitant",
        "> 10 m²/inhabitant",
        100.0,
    ),
    IndicatorDefinition::new(Ecology, "Air quality", "PM2.5 < 10 µg/m³ (WHO)", 40.0),
    IndicatorDefinition::new(Ecology, "Acoustic comfort", "< 55 dB(A)", 30.0),
    IndicatorDefinition::new(Ecology, "Urban biodiversity", "≥ 3 species per 100 m²", 20.0),
    IndicatorDefinition::new(Ecology, "Soil biotic index", "> 25%", 20.0),
];

const METABOLISM: &[IndicatorDefinition] = &[
    IndicatorDefinition::new(
        Metabolism,
        "Building energy efficiency",
        "Standard A or higher",
        40.0,
    ),
    IndicatorDefinition::new(Metabolism, "Waste management", "≥ 60% recycling", 35.0),
    IndicatorDefinition::new(
        Metabolism,
        "Water consumption",
        "≤ 100 L/inhabitant·day",
        35.0,
    ),
    IndicatorDefinition::new(Metabolism, "Renewable energy", "≥ 20% coverage", 30.0),
];

const COHESION: &[IndicatorDefinition] = &[
    IndicatorDefinition::new(
        Cohesion,
        "Social cohesion - participation",
        "Active programs ≥ 80%",
        30.0,
    ),
    IndicatorDefinition::new(
        Cohesion,
        "Urban complexity - diversity of uses",
        "≥ 3 uses per block",
        30.0,
    ),
    IndicatorDefinition::new(
        Cohesion,
        "Stay space per inhabitant",
        "≥ 10 m²/inhabitant",
        50.0,
    ),
    IndicatorDefinition::new(
        Cohesion,
        "Services and facilities",
        "≥ 80% within < 500 m",
        40.0,
    ),
];

/// Ordered indicators of a category (never empty)
pub fn indicators(category: Category) -> &'static [IndicatorDefinition] {
    match category {
        Category::Compactness => COMPACTNESS,
        Category::Ecology => ECOLOGY,
        Category::Metabolism => METABOLISM,
        Category::Cohesion => COHESION,
    }
}

/// Look up an indicator by name within a category
pub fn find(category: Category, name: &str) -> Option<&'static IndicatorDefinition> {
    indicators(category).iter().find(|def| def.name == name)
}

/// Every indicator of every category, in catalog order
pub fn all_indicators() -> impl Iterator<Item = &'static IndicatorDefinition> {
    Category::ALL
        .into_iter()
        .flat_map(|category| indicators(category).iter())
}
