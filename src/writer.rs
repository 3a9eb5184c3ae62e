//! Batched inserts into the `advocates` table.

use crate::advocate::Advocate;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use log::{debug, warn};
use sqlx::postgres::Postgres;
use sqlx::{types::Json, Connection, PgConnection, QueryBuilder};
use std::io::Write;
use std::time::{Duration, Instant};

/// Columns bound per advocate row.
pub const BINDS_PER_ROW: usize = 7;
/// Largest batch whose statement stays under Postgres's 65535 bind parameters.
pub const MAX_BATCH_SIZE: usize = u16::MAX as usize / BINDS_PER_ROW;

const INSERT_ADVOCATES: &str = "INSERT INTO advocates \
    (first_name, last_name, city, degree, payload, years_of_experience, phone_number) ";

/// Destination for batches of advocates. Each call to `insert_batch` is
/// committed on its own; a batch that fails leaves earlier ones in place.
#[allow(async_fn_in_trait)]
pub trait AdvocateSink {
    /// Writes and commits one batch, returning the number of rows inserted.
    async fn insert_batch(&mut self, batch: &[Advocate]) -> Result<u64>;

    async fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Builds one multi-row insert covering the whole batch.
pub fn build_insert(batch: &[Advocate]) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(INSERT_ADVOCATES);
    builder.push_values(batch, |mut b, advocate| {
        b.push_bind(&advocate.first_name)
            .push_bind(&advocate.last_name)
            .push_bind(&advocate.city)
            .push_bind(advocate.degree)
            .push_bind(Json(advocate.specialties_json()))
            .push_unseparated("::jsonb")
            .push_bind(advocate.years_of_experience)
            .push_bind(advocate.phone_number);
    });
    builder
}

/// Single Postgres connection. Dropping it (including on an error path)
/// rolls back any open transaction and closes the socket.
pub struct PgSink {
    conn: PgConnection,
}

impl PgSink {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let conn = PgConnection::connect(database_url)
            .await
            .context("failed to connect to database")?;
        Ok(Self { conn })
    }
}

impl AdvocateSink for PgSink {
    async fn insert_batch(&mut self, batch: &[Advocate]) -> Result<u64> {
        let mut tx = self.conn.begin().await.context("failed to begin transaction")?;

        let result = build_insert(batch)
            .build()
            .execute(&mut tx)
            .await
            .context("failed to insert advocates")?;

        tx.commit().await.context("failed to commit batch")?;
        Ok(result.rows_affected())
    }

    async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .context("failed to close database connection")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub inserted: u64,
    pub batches: u64,
    pub elapsed: Duration,
}

/// Buffers advocates and flushes them to the sink `batch_size` at a time.
pub struct BatchWriter<S, W> {
    sink: S,
    buffer: Vec<Advocate>,
    batch_size: usize,
    total: u64,
    inserted: u64,
    batches: u64,
    progress: ProgressReporter<W>,
    started: Instant,
}

impl<S: AdvocateSink, W: Write> BatchWriter<S, W> {
    pub fn new(sink: S, batch_size: usize, total: u64, progress: ProgressReporter<W>) -> Self {
        Self {
            sink,
            buffer: Vec::with_capacity(batch_size),
            batch_size,
            total,
            inserted: 0,
            batches: 0,
            progress,
            started: Instant::now(),
        }
    }

    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    pub async fn push(&mut self, advocate: Advocate) -> Result<()> {
        self.buffer.push(advocate);
        if self.buffer.len() >= self.batch_size {
            self.flush().await?;
            self.progress.batch_flushed(self.inserted, self.total)?;
        }
        Ok(())
    }

    /// Writes the buffered advocates as one batch and clears the buffer,
    /// returning how many were written. An empty buffer is a no-op.
    pub async fn flush(&mut self) -> Result<u64> {
        if self.buffer.is_empty() {
            return Ok(0);
        }

        let started = Instant::now();
        let batch = self.batches + 1;
        let rows = match self.sink.insert_batch(&self.buffer).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(
                    "batch {batch} failed after {} committed advocates: {err:#}",
                    self.inserted
                );
                return Err(err.context(format!("failed to write batch {batch}")));
            }
        };

        let written = self.buffer.len() as u64;
        if rows != written {
            debug!("batch {batch}: store reported {rows} rows for {written} advocates");
        }
        debug!(
            "batch {batch}: {written} advocates in {:.2?}",
            started.elapsed()
        );
        self.inserted += written;
        self.batches = batch;
        self.buffer.clear();
        Ok(written)
    }

    /// Flushes the remainder without a progress line, closes the sink and
    /// prints the summary.
    pub async fn finish(mut self) -> Result<SeedSummary> {
        self.flush().await?;
        self.sink.close().await?;

        let summary = SeedSummary {
            inserted: self.inserted,
            batches: self.batches,
            elapsed: self.started.elapsed(),
        };
        self.progress.done(summary.inserted, summary.elapsed)?;
        Ok(summary)
    }
}
