use serde::Serialize;
use std::io::Write;

use super::{OutputWriter, ScoreReport};
use crate::catalog::IndicatorDefinition;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport<'_>) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_catalog(&mut self, indicators: &[&IndicatorDefinition]) -> anyhow::Result<()> {
        self.write_json(indicators)
    }
}
