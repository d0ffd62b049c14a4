//! Run log for batch font conversions.
//!
//! A caller-owned handle that records which header files a run produced.
//! Passing the handle explicitly keeps the encoding engine free of I/O
//! side effects; only the CLI's outer loop ever touches it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

const RULE: &str = "====================================================================";

/// An open run log. Created per batch run, finished when the run ends.
pub struct RunLog {
    writer: BufWriter<File>,
}

impl RunLog {
    /// Create `bitsmith.log` inside `dir` and write the banner.
    pub fn create(dir: &Path) -> std::io::Result<Self> {
        let file = File::create(dir.join("bitsmith.log"))?;
        let mut writer = BufWriter::new(file);
        writeln!(
            writer,
            "bitsmith run started {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(writer, "{RULE}")?;
        Ok(Self { writer })
    }

    /// Record one produced output file.
    pub fn record(&mut self, entry: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{entry}")
    }

    /// Write the closing rule and flush.
    pub fn finish(mut self) -> std::io::Result<()> {
        writeln!(self.writer, "{RULE}")?;
        self.writer.flush()
    }
}
