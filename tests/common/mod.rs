// Test utility module for ecoscore integration tests
#![allow(dead_code)]

use ecoscore::{Category, Entry};

/// Entry with numeric points and no comment
pub fn entry(category: Category, indicator: &str, max: f64, achieved: f64) -> Entry {
    Entry::new(category, indicator, max, achieved, "")
}

/// One fully achieved entry per category
pub fn perfect_entries() -> Vec<Entry> {
    Category::ALL
        .iter()
        .map(|category| {
            let def = &ecoscore::catalog::indicators(*category)[0];
            entry(*category, def.name, def.max_points, def.max_points)
        })
        .collect()
}

/// Entries as the `score` and `export` commands read them
pub fn entries_json(entries: &[Entry]) -> String {
    serde_json::to_string_pretty(entries).unwrap()
}
