pub mod advocate;
pub mod config;
pub mod progress;
pub mod writer;

use advocate::AdvocateGenerator;
use anyhow::{ensure, Result};
use log::info;
use progress::ProgressReporter;
use rand::Rng;
use std::io::Write;
use writer::{AdvocateSink, BatchWriter};

pub use writer::SeedSummary;

pub struct SeedOptions {
    pub num_records: usize,
    pub batch_size: usize,
}

pub struct SeedOptionsBuilder {
    num_records: Option<usize>,
    batch_size: Option<usize>,
}

impl SeedOptionsBuilder {
    const DEFAULT_BATCH_SIZE: usize = config::BATCH_SIZE;
    const DEFAULT_NUM_RECORDS: usize = config::DEFAULT_COUNT;

    pub fn new() -> Self {
        Self {
            num_records: None,
            batch_size: None,
        }
    }

    pub fn num_records(mut self, num_records: usize) -> Self {
        self.num_records = Some(num_records);
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn build(self) -> Result<SeedOptions> {
        let batch_size = self.batch_size.unwrap_or(Self::DEFAULT_BATCH_SIZE);
        ensure!(batch_size > 0, "batch_size must be at least 1");
        ensure!(
            batch_size <= writer::MAX_BATCH_SIZE,
            "batch_size {batch_size} exceeds {} ({} binds per row, 65535 per statement)",
            writer::MAX_BATCH_SIZE,
            writer::BINDS_PER_ROW
        );

        Ok(SeedOptions {
            num_records: self.num_records.unwrap_or(Self::DEFAULT_NUM_RECORDS),
            batch_size,
        })
    }
}

impl Default for SeedOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedOptions {
    /// Generates `num_records` advocates and writes them to `sink`, printing
    /// progress to `out`. Stops at the first failed batch; batches written
    /// before it stay committed.
    pub async fn seed<R, S, W>(&self, rng: R, sink: S, out: W) -> Result<SeedSummary>
    where
        R: Rng,
        S: AdvocateSink,
        W: Write,
    {
        info!(
            "seeding {} advocates in batches of {}",
            self.num_records, self.batch_size
        );

        let mut writer = BatchWriter::new(
            sink,
            self.batch_size,
            self.num_records as u64,
            ProgressReporter::new(out),
        );

        for advocate in AdvocateGenerator::new(rng, self.num_records) {
            writer.push(advocate).await?;
        }

        writer.finish().await
    }
}
