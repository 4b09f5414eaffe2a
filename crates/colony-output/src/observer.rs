//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use colony_behavior::World;
use colony_core::Tick;
use colony_sim::{SimObserver, TickMetrics};

use crate::row::{CatSnapshotRow, TickMetricsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the per-tick metrics and periodic cat
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    metrics_rows:  usize,
    snapshot_rows: usize,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, metrics_rows: 0, snapshot_rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Metrics rows handed to the writer so far.
    pub fn metrics_rows(&self) -> usize {
        self.metrics_rows
    }

    /// Cat snapshot rows handed to the writer so far.
    pub fn snapshot_rows(&self) -> usize {
        self.snapshot_rows
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, metrics: &TickMetrics) {
        let result = self.writer.write_metrics(&TickMetricsRow::from(metrics));
        self.metrics_rows += 1;
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        let rows = CatSnapshotRow::collect(tick, world);
        if !rows.is_empty() {
            self.snapshot_rows += rows.len();
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_metrics: &TickMetrics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
