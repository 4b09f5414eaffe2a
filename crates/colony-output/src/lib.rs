//! `colony-output`: simulation output writers for the cat colony model.
//!
//! | Backend | Files created                               |
//! |---------|---------------------------------------------|
//! | CSV     | `tick_metrics.csv`, `cat_snapshots.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `colony_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use colony_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CatSnapshotRow, TickMetricsRow};
pub use writer::OutputWriter;
