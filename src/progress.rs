use std::io::{self, Write};
use std::time::Duration;

/// Writes the progress transcript: one line per full batch and a summary.
pub struct ProgressReporter<W> {
    out: W,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn batch_flushed(&mut self, inserted: u64, total: u64) -> io::Result<()> {
        writeln!(self.out, "Inserted {inserted}/{total}...")
    }

    pub fn done(&mut self, inserted: u64, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "Done. Inserted {inserted} advocates in {:.1}s",
            elapsed.as_secs_f64()
        )?;
        self.out.flush()
    }
}
