use crate::application::driver::Outcome;
use crate::error::Result;
use std::io::Write;

/// Writes action outcomes as CSV, one row per action, with a header.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    /// Creates a new `OutcomeWriter` over any `Write` sink (e.g., Stdout, a file).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes one outcome; the header is written before the first row.
    pub fn write(&mut self, outcome: &Outcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn write_all<'a>(&mut self, outcomes: impl IntoIterator<Item = &'a Outcome>) -> Result<()> {
        for outcome in outcomes {
            self.write(outcome)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
