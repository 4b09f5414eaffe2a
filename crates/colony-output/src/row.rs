//! Plain data row types written by output backends.

use serde::Serialize;

use colony_behavior::World;
use colony_core::Tick;
use colony_sim::TickMetrics;

/// One row of `tick_metrics.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickMetricsRow {
    pub tick:                   u64,
    pub cat_population:         u64,
    pub hunger_fraction:        f64,
    pub mice_population:        u64,
    /// Empty field when the colony is empty.
    pub min_ticks_until_hungry: Option<i64>,
    pub pregnant:               u64,
    pub fights:                 u64,
    pub hit:                    u64,
    pub removed:                u64,
    pub mice_caught:            u64,
    pub kittens_born:           u64,
}

impl TickMetricsRow {
    pub const HEADER: [&'static str; 11] = [
        "tick",
        "cat_population",
        "hunger_fraction",
        "mice_population",
        "min_ticks_until_hungry",
        "pregnant",
        "fights",
        "hit",
        "removed",
        "mice_caught",
        "kittens_born",
    ];
}

impl From<&TickMetrics> for TickMetricsRow {
    fn from(m: &TickMetrics) -> Self {
        Self {
            tick:                   m.tick.0,
            cat_population:         m.cat_population as u64,
            hunger_fraction:        m.hunger_fraction,
            mice_population:        m.mice_population,
            min_ticks_until_hungry: m.min_ticks_until_hungry,
            pregnant:               m.pregnant as u64,
            fights:                 m.counters.fights,
            hit:                    m.counters.hit,
            removed:                m.counters.removed,
            mice_caught:            m.counters.mice_caught,
            kittens_born:           m.counters.kittens_born,
        }
    }
}

/// The state of one live cat at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatSnapshotRow {
    pub cat_id:             u32,
    pub tick:               u64,
    pub x:                  u32,
    pub y:                  u32,
    pub sex:                &'static str,
    pub hungry:             bool,
    pub asleep:             bool,
    pub pregnant:           bool,
    pub ticks_until_hungry: i64,
}

impl CatSnapshotRow {
    pub const HEADER: [&'static str; 9] = [
        "cat_id",
        "tick",
        "x",
        "y",
        "sex",
        "hungry",
        "asleep",
        "pregnant",
        "ticks_until_hungry",
    ];

    /// One row per live cat in roster order.  Cats without a grid position
    /// are skipped.
    pub fn collect(tick: Tick, world: &World) -> Vec<Self> {
        world
            .agents
            .iter_cats()
            .filter_map(|(id, cat)| {
                let pos = world.grid.position(id)?;
                Some(Self {
                    cat_id:             id.0,
                    tick:               tick.0,
                    x:                  pos.x,
                    y:                  pos.y,
                    sex:                cat.sex.as_str(),
                    hungry:             cat.is_hungry,
                    asleep:             cat.is_asleep,
                    pregnant:           cat.pregnant,
                    ticks_until_hungry: cat.ticks_until_hungry,
                })
            })
            .collect()
    }
}
