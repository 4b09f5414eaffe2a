//! The `OutputWriter` trait implemented by backend writers.

use crate::{CatSnapshotRow, OutputResult, TickMetricsRow};

/// Sink for the two output tables.
///
/// The observer never sees these errors directly; they are stored and
/// retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one per-tick metrics row.
    fn write_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()>;

    /// Write a batch of cat snapshots taken at the same tick.
    fn write_snapshots(&mut self, rows: &[CatSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
