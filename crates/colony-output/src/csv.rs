//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_metrics.csv`
//! - `cat_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{CatSnapshotRow, OutputResult, TickMetricsRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    metrics:   Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut metrics = open(&dir.join("tick_metrics.csv"))?;
        metrics.write_record(TickMetricsRow::HEADER)?;

        let mut snapshots = open(&dir.join("cat_snapshots.csv"))?;
        snapshots.write_record(CatSnapshotRow::HEADER)?;

        Ok(Self { metrics, snapshots, finished: false })
    }
}

/// Headers are written explicitly so an empty table still carries them.
fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.metrics.serialize(row)?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[CatSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
