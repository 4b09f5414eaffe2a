//! Mouse colony living behind a restaurant.
//!
//! New mice arrive after a Poisson-distributed wait whose mean is the
//! colony's `growth_rate`.  Every arrival shortens the mean by a tenth (at
//! least one tick) down to `growth_floor`, so a thriving colony grows faster
//! until it hits the cap.  Every catch lengthens it again.

use colony_core::SimRng;

use crate::AgentRates;

/// Population at which a hunting cat is certain to find a mouse
/// (before its own skill is applied).
const FULL_CAPTURE_POPULATION: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub mice_population:       u32,
    /// Mean ticks between arrivals.  Never below `growth_floor`.
    pub growth_rate:           i64,
    pub growth_floor:          i64,
    growth_nudge:              i64,
    pub ticks_until_new_mouse: i64,
    /// Mice caught here since the start of the run.
    pub mice_caught:           u32,
    pub capture_probability:   f64,
}

impl Restaurant {
    pub fn new(rates: &AgentRates, rng: &mut SimRng) -> Self {
        let growth_floor = rates.growth_floor_ticks.max(1);
        let mice_population = rng.poisson(rates.initial_mice).max(0) as u32;
        let growth_rate = rng.poisson(rates.mouse_growth_ticks).max(growth_floor);
        let ticks_until_new_mouse = rng.poisson(growth_rate as f64);
        let mut restaurant = Self {
            mice_population,
            growth_rate,
            growth_floor,
            growth_nudge: rates.growth_nudge_ticks,
            ticks_until_new_mouse,
            mice_caught: 0,
            capture_probability: 0.0,
        };
        restaurant.recompute_capture();
        restaurant
    }

    pub fn has_mice(&self) -> bool {
        self.mice_population > 0
    }

    pub fn step(&mut self, rng: &mut SimRng) {
        self.ticks_until_new_mouse -= 1;
        if self.ticks_until_new_mouse > 0 {
            return;
        }
        self.mice_population += 1;
        let tightening = (self.growth_rate / 10).max(1);
        self.growth_rate = (self.growth_rate - tightening).max(self.growth_floor);
        self.recompute_capture();
        self.ticks_until_new_mouse = rng.poisson(self.growth_rate as f64);
    }

    /// A cat caught a mouse here.  Returns `false` (and changes nothing) if
    /// the colony was already empty.
    pub fn catch_mouse(&mut self) -> bool {
        if self.mice_population == 0 {
            return false;
        }
        self.mice_population -= 1;
        self.mice_caught += 1;
        self.growth_rate += self.growth_nudge;
        self.recompute_capture();
        true
    }

    fn recompute_capture(&mut self) {
        self.capture_probability = (self.mice_population as f64 / FULL_CAPTURE_POPULATION).min(1.0);
    }
}
