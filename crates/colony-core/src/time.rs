//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Every timer in the
//! model (hunger, sleep, gestation, mouse arrivals, culling cadence) counts
//! ticks, never wall-clock seconds.  `SimClock` holds the tick resolution and
//! converts human-scale durations (hours, days) into tick counts.
//!
//! The default resolution is 900 s per tick (15 simulated minutes, 96 ticks
//! per day).  Parameters that are naturally expressed in hours are converted
//! through [`SimClock::ticks_per_hour`] so a different resolution rescales
//! them consistently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds per tick used when nothing else is configured.
pub const DEFAULT_TICK_SECS: u32 = 900;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts durations into tick counts.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// How many simulated seconds one tick represents.  Default: 900.
    pub tick_duration_secs: u32,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// Break elapsed time into (day, hour, minute) components from sim start.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs();
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        (days, hours, minutes)
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// Ticks in one simulated hour (fractional when a tick exceeds an hour).
    #[inline]
    pub fn ticks_per_hour(&self) -> f64 {
        3_600.0 / self.tick_duration_secs as f64
    }

    /// Mean tick count for a duration of `hours`.  Used for Poisson means,
    /// which may be fractional.
    #[inline]
    pub fn mean_ticks_for_hours(&self, hours: f64) -> f64 {
        hours * self.ticks_per_hour()
    }

    /// How many whole ticks span `secs` seconds? (rounds up)
    ///
    /// A zero tick duration is treated as one second so a misconfigured
    /// clock reaches validation instead of dividing by zero.
    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs.div_ceil(self.tick_duration_secs.max(1) as u64)
    }

    /// Whole ticks spanning `hours` (rounded to the nearest tick).
    #[inline]
    pub fn ticks_for_hours(&self, hours: f64) -> u64 {
        self.mean_ticks_for_hours(hours).round().max(0.0) as u64
    }

    #[inline]
    pub fn ticks_for_days(&self, days: u64) -> u64 {
        self.ticks_for_secs(days * 86_400)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_SECS)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, d, h, m)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: resolution, budget, seed, snapshot cadence.
///
/// Model parameters (grid size, rates, probabilities) live separately in
/// [`ModelParams`][crate::ModelParams].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seconds per tick.  Default: 900.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.  For 30 days at 15-minute ticks: 30 * 96.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed reproduces the same run.
    pub seed: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:    DEFAULT_TICK_SECS,
            total_ticks:           1_000,
            seed:                  1234,
            output_interval_ticks: 1_000,
        }
    }
}
