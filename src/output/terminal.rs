use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

use super::{OutputWriter, ScoreReport};
use crate::catalog::IndicatorDefinition;
use crate::entry::Entry;
use crate::scoring::{OverallResult, Summary};

pub struct TerminalWriter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, use_color: bool) -> Self {
        Self { writer, use_color }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_result(&mut self, result: &OverallResult) -> anyhow::Result<()> {
        let score = format_total(result.total);
        let level = if self.use_color {
            result
                .grade
                .label()
                .color(result.grade.color())
                .bold()
                .to_string()
        } else {
            result.grade.label().to_string()
        };
        writeln!(self.writer, "Final score (%): {}", score)?;
        writeln!(self.writer, "Level:           {}", level)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport<'_>) -> anyhow::Result<()> {
        let heading = self.heading("Indicators");
        writeln!(self.writer, "{}", heading)?;
        writeln!(self.writer, "{}", entries_table(report.entries))?;
        writeln!(self.writer)?;

        match (&report.result, report.message) {
            (Some(result), _) => {
                let heading = self.heading("Results by Category");
                writeln!(self.writer, "{}", heading)?;
                writeln!(self.writer, "{}", summary_table(report.summary))?;
                writeln!(self.writer)?;
                self.write_result(result)?;
            }
            (None, Some(message)) => {
                let line = if self.use_color {
                    message.blue().to_string()
                } else {
                    message.to_string()
                };
                writeln!(self.writer, "ℹ {}", line)?;
            }
            (None, None) => {}
        }
        Ok(())
    }

    fn write_catalog(&mut self, indicators: &[&IndicatorDefinition]) -> anyhow::Result<()> {
        let mut table = new_table();
        table.set_header(vec!["Category", "Indicator", "Reference", "Max points"]);
        for def in indicators {
            table.add_row(vec![
                Cell::new(def.category.label()),
                Cell::new(def.name),
                Cell::new(def.reference_threshold),
                Cell::new(format_number(def.max_points)).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        Ok(())
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Entries as typed, one row each
pub fn entries_table(entries: &[Entry]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "#",
        "Category",
        "Indicator",
        "Max points",
        "Achieved points",
        "Comments",
    ]);
    for (idx, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1).set_alignment(CellAlignment::Right),
            Cell::new(entry.category.label()),
            Cell::new(&entry.indicator),
            Cell::new(&entry.max_points).set_alignment(CellAlignment::Right),
            Cell::new(&entry.achieved_points).set_alignment(CellAlignment::Right),
            Cell::new(&entry.comment),
        ]);
    }
    table
}

pub fn summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Category",
        "Max points",
        "Achieved points",
        "% achieved",
        "Weight (%)",
        "Contribution (out of 100)",
    ]);
    for row in summary {
        table.add_row(vec![
            Cell::new(row.category.label()),
            Cell::new(format_number(row.sum_max_points)).set_alignment(CellAlignment::Right),
            Cell::new(format_number(row.sum_achieved_points)).set_alignment(CellAlignment::Right),
            Cell::new(format_number(row.percent_achieved)).set_alignment(CellAlignment::Right),
            Cell::new(format_number(row.weight)).set_alignment(CellAlignment::Right),
            Cell::new(format_number(row.contribution)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Up to two decimals, trailing zeros dropped
pub fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Final score as shown next to the grade, e.g. `25.0 %`
pub fn format_total(total: f64) -> String {
    format!("{:.1} %", total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::scoring::compute_summary;

    fn render(entries: &[Entry]) -> String {
        let summary = compute_summary(entries);
        let report = ScoreReport::new(entries, &summary);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, false)
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(37.5), "37.5");
        assert_eq!(format_number(33.333), "33.33");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_format_total_keeps_one_decimal() {
        assert_eq!(format_total(25.0), "25.0 %");
        assert_eq!(format_total(100.0), "100.0 %");
    }

    #[test]
    fn test_empty_report_shows_prompt() {
        let output = render(&[]);
        assert!(output.contains("Add indicators from the side panel to calculate results."));
        assert!(!output.contains("Final score"));
    }

    #[test]
    fn test_report_shows_grade() {
        let entries = vec![Entry::new(Category::Ecology, "Air quality", 40.0, 40.0, "ok")];
        let output = render(&entries);
        assert!(output.contains("Axis 2 - Ecological urbanism"));
        assert!(output.contains("Final score (%): 25.0 %"));
        assert!(output.contains("D (Insufficient)"));
    }
}
