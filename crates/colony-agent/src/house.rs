use colony_core::SimRng;

use crate::AgentRates;

/// A house lot and its (possible) food bowl.
#[derive(Clone, Debug, PartialEq)]
pub struct House {
    /// Whether this household ever feeds cats.  Fixed for the whole run.
    pub puts_food: bool,
    /// A bowl is out right now.
    pub food: bool,
    /// Per-tick chance that an empty bowl gets refilled.
    pub restock_probability: f64,
}

impl House {
    /// Roll the household's willingness and personal restock interval.
    /// Feeding houses start with a full bowl.
    pub fn new(rates: &AgentRates, rng: &mut SimRng) -> Self {
        let puts_food = rng.gen_bool(rates.house_willingness);
        let restock_ticks = rng.poisson_at_least_one(rates.house_restock_ticks);
        Self {
            puts_food,
            food: puts_food,
            restock_probability: 1.0 / restock_ticks as f64,
        }
    }

    pub fn step(&mut self, rng: &mut SimRng) {
        if self.puts_food && !self.food && rng.gen_bool(self.restock_probability) {
            self.food = true;
        }
    }

    /// Empty the bowl.  Returns `false` if there was nothing in it.
    pub fn take_food(&mut self) -> bool {
        std::mem::replace(&mut self.food, false)
    }
}
