//! colony-run: run the urban cat colony model from a JSON parameter file.
//!
//! ```text
//! colony-run [params.json]
//! ```
//!
//! Without an argument, `colony_params.json` in the working directory is
//! used when present, otherwise the built-in defaults.  Per-tick metrics and
//! periodic cat snapshots are written as CSV to the run's `output_dir`.
//! Log verbosity follows `RUST_LOG` (default `info`).

mod params;


use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use colony_behavior::World;
use colony_core::Tick;
use colony_output::{CsvWriter, SimOutputObserver};
use colony_sim::{SimBuilder, SimObserver, TickMetrics};

use params::ParamFile;

const DEFAULT_PARAMS: &str = "colony_params.json";

// ── Progress reporting ────────────────────────────────────────────────────────

/// Logs a one-line population summary every `every` ticks and forwards all
/// callbacks to the wrapped observer.
struct Progress<O: SimObserver> {
    inner: O,
    every: u64,
}

impl<O: SimObserver> Progress<O> {
    fn new(inner: O, every: u64) -> Self {
        Self { inner, every: every.max(1) }
    }

    fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_tick_start(&mut self, metrics: &TickMetrics) {
        if metrics.tick.0 % self.every == 0 {
            info!(
                tick = metrics.tick.0,
                cats = metrics.cat_population,
                hungry = metrics.hungry,
                pregnant = metrics.pregnant,
                mice = metrics.mice_population,
                "progress"
            );
        }
        self.inner.on_tick_start(metrics);
    }

    fn on_tick_end(&mut self, tick: Tick, stepped: usize) {
        self.inner.on_tick_end(tick, stepped);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        self.inner.on_snapshot(tick, world);
    }

    fn on_sim_end(&mut self, final_metrics: &TickMetrics) {
        self.inner.on_sim_end(final_metrics);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let file = match std::env::args().nth(1) {
        Some(path) => ParamFile::load(Path::new(&path))?,
        None if Path::new(DEFAULT_PARAMS).exists() => ParamFile::load(Path::new(DEFAULT_PARAMS))?,
        None => {
            info!("no parameter file given, using defaults");
            ParamFile::default()
        }
    };

    let issues = file.check();
    if !issues.is_empty() {
        info!(count = issues.len(), "continuing with out-of-range parameters");
    }

    let params = file.model_params()?;
    let config = file.sim_config();
    let per_day = config.make_clock().ticks_for_days(1);

    let mut sim = SimBuilder::colony(config, params)
        .build()
        .context("building the colony model")?;

    let writer = CsvWriter::new(&file.run.output_dir)
        .with_context(|| format!("opening output in {}", file.run.output_dir.display()))?;
    let mut observer = Progress::new(SimOutputObserver::new(writer), per_day);

    let started = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = started.elapsed();

    let mut output = observer.into_inner();
    if let Some(e) = output.take_error() {
        return Err(e).context("writing simulation output");
    }

    let m = sim.metrics();
    info!(
        ticks = m.tick.0,
        elapsed_ms = elapsed.as_millis() as u64,
        cats = m.cat_population,
        mice = m.mice_population,
        pregnant = m.pregnant,
        fights = m.counters.fights,
        hit = m.counters.hit,
        removed = m.counters.removed,
        mice_caught = m.counters.mice_caught,
        kittens_born = m.counters.kittens_born,
        metrics_rows = output.metrics_rows(),
        snapshot_rows = output.snapshot_rows(),
        output_dir = %file.run.output_dir.display(),
        "colony run complete"
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
