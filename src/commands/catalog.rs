use anyhow::Result;
use std::io::Write;

use crate::catalog::{self, Category, IndicatorDefinition};
use crate::output::{create_writer, OutputFormat};

/// Print the catalog, optionally restricted to one category
pub fn list_catalog(category: Option<&str>, format: OutputFormat, use_color: bool) -> Result<()> {
    let stdout = std::io::stdout();
    write_catalog(category, format, use_color, stdout.lock())
}

pub fn write_catalog<W: Write>(
    category: Option<&str>,
    format: OutputFormat,
    use_color: bool,
    writer: W,
) -> Result<()> {
    let indicators: Vec<&IndicatorDefinition> = match category {
        Some(key) => catalog::indicators(Category::from_key(key)?).iter().collect(),
        None => catalog::all_indicators().collect(),
    };
    create_writer(format, writer, use_color).write_catalog(&indicators)
}
