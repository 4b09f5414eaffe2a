//! Per-tick population snapshot.

use colony_behavior::{Counters, World};
use colony_core::Tick;

/// What the data collector records every tick.
///
/// Collected at the start of a tick, so the values describe the state left
/// behind by the previous tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMetrics {
    pub tick:                   Tick,
    pub cat_population:         usize,
    pub hungry:                 usize,
    /// `hungry / cat_population`, 0 with no cats.
    pub hunger_fraction:        f64,
    /// Mice across every restaurant.
    pub mice_population:        u64,
    /// Hungriest cat's `ticks_until_hungry`; `None` with no cats.
    pub min_ticks_until_hungry: Option<i64>,
    pub pregnant:               usize,
    /// Cumulative counters (fights, car deaths, removals, catches, births).
    pub counters:               Counters,
}

impl TickMetrics {
    pub fn collect(world: &World) -> Self {
        let mut cat_population = 0;
        let mut hungry = 0;
        let mut pregnant = 0;
        let mut min_ticks_until_hungry: Option<i64> = None;
        for (_, cat) in world.agents.iter_cats() {
            cat_population += 1;
            if cat.is_hungry {
                hungry += 1;
            }
            if cat.pregnant {
                pregnant += 1;
            }
            min_ticks_until_hungry = Some(match min_ticks_until_hungry {
                Some(m) => m.min(cat.ticks_until_hungry),
                None => cat.ticks_until_hungry,
            });
        }

        let mice_population = world
            .agents
            .iter_restaurants()
            .map(|(_, r)| r.mice_population as u64)
            .sum();

        let hunger_fraction = if cat_population == 0 {
            0.0
        } else {
            hungry as f64 / cat_population as f64
        };

        Self {
            tick: world.tick,
            cat_population,
            hungry,
            hunger_fraction,
            mice_population,
            min_ticks_until_hungry,
            pregnant,
            counters: world.counters,
        }
    }
}
