//! Text and JSON exports of the bar listing
//!
//! The tab-separated dump is the artifact other tooling consumes: one
//! `value<TAB>count` line per bar, in ascending order.

use crate::histogram::StreamingHistogram;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use streamhist_core::Result;
use tracing::debug;

impl StreamingHistogram {
    /// Flush, then write one `value\tcount` line per bar
    pub fn write_tsv<W: Write>(&mut self, mut writer: W) -> Result<()> {
        for bar in self.bars() {
            writeln!(writer, "{}\t{}", bar.value, bar.count)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Flush, then write the TSV dump to a new file at `path`
    pub fn export_tsv<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_tsv(BufWriter::new(file))?;
        debug!(path = %path.display(), "Wrote histogram dump");
        Ok(())
    }

    /// Flush, then serialize the bars (without their raw points) as JSON
    pub fn to_json(&mut self) -> Result<String> {
        let json = serde_json::to_string(self.bars()).map_err(anyhow::Error::from)?;
        Ok(json)
    }
}
