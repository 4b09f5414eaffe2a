//! Model parameters converted to the tick basis of a run.
//!
//! `ModelParams` speaks in hours; agents count ticks.  `AgentRates` is the
//! conversion, done once at model construction and shared by every agent
//! constructor (initial population, kittens, houses, restaurants).

use colony_core::{ModelParams, SimClock};

/// Hours of ticks below which a restaurant's arrival interval never drops.
const GROWTH_FLOOR_HOURS: f64 = 12.0;

/// Hours of ticks added to a restaurant's arrival interval per mouse caught.
const GROWTH_NUDGE_HOURS: f64 = 1.0;

/// Poisson means (in ticks) and probabilities used to create agents.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentRates {
    // ── Cats ──────────────────────────────────────────────────────────────
    pub hunger_ticks:         f64,
    pub sleepy_ticks:         f64,
    pub sleep_duration_ticks: f64,

    // ── Houses ────────────────────────────────────────────────────────────
    pub house_willingness:    f64,
    pub house_restock_ticks:  f64,

    // ── Restaurants ───────────────────────────────────────────────────────
    pub initial_mice:         f64,
    pub mouse_growth_ticks:   f64,
    pub growth_floor_ticks:   i64,
    pub growth_nudge_ticks:   i64,
}

impl AgentRates {
    pub fn from_params(params: &ModelParams, clock: &SimClock) -> Self {
        Self {
            hunger_ticks:         clock.mean_ticks_for_hours(params.hunger_rate),
            sleepy_ticks:         clock.mean_ticks_for_hours(params.sleep_rate),
            sleep_duration_ticks: clock.mean_ticks_for_hours(params.sleep_duration_rate),
            house_willingness:    params.house_willingness,
            house_restock_ticks:  clock.mean_ticks_for_hours(params.house_rate),
            initial_mice:         params.initial_mice_pop,
            mouse_growth_ticks:   clock.mean_ticks_for_hours(params.mouse_growth_rate),
            growth_floor_ticks:   clock.ticks_for_hours(GROWTH_FLOOR_HOURS).max(1) as i64,
            growth_nudge_ticks:   clock.ticks_for_hours(GROWTH_NUDGE_HOURS).max(1) as i64,
        }
    }
}

impl Default for AgentRates {
    fn default() -> Self {
        Self::from_params(&ModelParams::default(), &SimClock::default())
    }
}
