//! Fixed cat rules, converted to the tick basis of a run.
//!
//! Durations are stated in hours or days and turned into ticks through the
//! run's `SimClock`, so a coarser or finer tick keeps the same behavior in
//! simulated time.

use colony_core::{ModelParams, SimClock};

/// Hours of unrelieved hunger before a cat heads back to the last place it ate.
const APPROACH_AFTER_HOURS: f64 = 6.0;

/// Hours of unrelieved hunger before a cat stops hunting and just roams.
const GIVE_UP_AFTER_HOURS: f64 = 24.0;

const FEMALE_PRESENCE_BONUS: f64 = 0.25;
const VIOLENCE_DAMPENING: f64 = 0.5;
const MATING_SUCCESS: f64 = 0.5;
const GESTATION_DAYS: u64 = 64;
const LITTER_MIN: u32 = 1;
const LITTER_MAX: u32 = 6;

/// Days from birth until a kitten joins the adult population.
const MATURITY_DAYS: u64 = 150;

#[derive(Clone, Debug, PartialEq)]
pub struct CatRules {
    /// Ticks past hunger onset after which a remembered food spot is sought.
    pub approach_after:        i64,
    /// Ticks past hunger onset after which restaurants are ignored.
    pub give_up_after:         i64,
    pub female_presence_bonus: f64,
    pub violence_dampening:    f64,
    pub mating_success:        f64,
    pub gestation_ticks:       i64,
    pub litter_min:            u32,
    pub litter_max:            u32,
    pub maturity_ticks:        u64,
    /// Per-tick chance of being hit while standing on a street.
    pub car_hit_prob:          f64,
}

impl CatRules {
    pub fn new(params: &ModelParams, clock: &SimClock) -> Self {
        Self {
            approach_after:        clock.ticks_for_hours(APPROACH_AFTER_HOURS) as i64,
            give_up_after:         clock.ticks_for_hours(GIVE_UP_AFTER_HOURS) as i64,
            female_presence_bonus: FEMALE_PRESENCE_BONUS,
            violence_dampening:    VIOLENCE_DAMPENING,
            mating_success:        MATING_SUCCESS,
            gestation_ticks:       clock.ticks_for_days(GESTATION_DAYS).max(1) as i64,
            litter_min:            LITTER_MIN,
            litter_max:            LITTER_MAX,
            maturity_ticks:        clock.ticks_for_days(MATURITY_DAYS),
            car_hit_prob:          params.car_hit_prob,
        }
    }
}

impl Default for CatRules {
    fn default() -> Self {
        Self::new(&ModelParams::default(), &SimClock::default())
    }
}
