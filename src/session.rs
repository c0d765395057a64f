//! Session-scoped entry table.
//!
//! A [`Session`] is created when a user starts working and dropped when they
//! are done; its entries are never written anywhere else. All derived values
//! are recomputed from the entries on every call.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::{self, Category};
use crate::entry::{Entry, PointsValue};
use crate::scoring::{self, OverallResult, Summary};

/// Append-only table of entries owned by one interactive session
#[derive(Debug, Clone)]
pub struct Session {
    entries: Vec<Entry>,
    started_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Seed a session with entries read from an external source
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            started_at: Utc::now(),
        }
    }

    /// Append one row. Never fails and never merges with existing rows.
    ///
    /// The indicator name is expected to belong to `category` but is not
    /// checked beyond a debug log; numeric values are not range-checked.
    pub fn add_entry(
        &mut self,
        category: Category,
        indicator: impl Into<String>,
        max_points: impl Into<PointsValue>,
        achieved_points: impl Into<PointsValue>,
        comment: impl Into<String>,
    ) {
        let entry = Entry::new(category, indicator, max_points, achieved_points, comment);
        if catalog::find(category, &entry.indicator).is_none() {
            debug!(
                category = category.key(),
                indicator = %entry.indicator,
                "Indicator is not part of the category catalog"
            );
        }
        debug!(
            category = category.key(),
            indicator = %entry.indicator,
            rows = self.entries.len() + 1,
            "Entry added"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Fresh per-category summary of the current entries
    pub fn summary(&self) -> Summary {
        scoring::compute_summary(&self.entries)
    }

    /// Fresh overall result, `None` while there are no entries
    pub fn overall(&self) -> Option<OverallResult> {
        scoring::overall(&self.summary())
    }
}
