//! Simulation observer trait for progress reporting and data collection.

use colony_behavior::World;
use colony_core::Tick;

use crate::TickMetrics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_start(&mut self, metrics: &TickMetrics) {
///         if metrics.tick.0 % self.interval == 0 {
///             println!("{}: {} cats", metrics.tick, metrics.cat_population);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent steps, with
    /// the metrics of the state left by the previous tick.
    fn on_tick_start(&mut self, _metrics: &TickMetrics) {}

    /// Called at the end of each tick.
    ///
    /// `stepped` is the number of agents whose step ran this tick.
    fn on_tick_end(&mut self, _tick: Tick, _stepped: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the whole world so output writers can
    /// record per-cat state without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World) {}

    /// Called once after the final tick completes, with the final state's
    /// metrics.
    fn on_sim_end(&mut self, _final_metrics: &TickMetrics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
