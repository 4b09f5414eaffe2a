//! Integration tests for colony-sim.

use colony_behavior::{NoopBehavior, World};
use colony_core::{ModelParams, SimConfig, Tick};

use crate::{SimBuilder, SimObserver, TickMetrics};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        tick_duration_secs:    900,
        total_ticks,
        seed:                  42,
        output_interval_ticks: 0,
    }
}

fn small_params(num_cats: u32) -> ModelParams {
    ModelParams { width: 12, height: 8, num_cats, ..ModelParams::default() }
}

/// Records every metrics row and counts callbacks.
#[derive(Default)]
struct Recorder {
    metrics:   Vec<TickMetrics>,
    ends:      usize,
    snapshots: Vec<Tick>,
    last:      Option<TickMetrics>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, metrics: &TickMetrics) {
        self.metrics.push(metrics.clone());
    }
    fn on_tick_end(&mut self, _tick: Tick, _stepped: usize) {
        self.ends += 1;
    }
    fn on_snapshot(&mut self, tick: Tick, _world: &World) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, final_metrics: &TickMetrics) {
        self.last = Some(final_metrics.clone());
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use colony_grid::Terrain;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_city_and_population() {
        let sim = SimBuilder::colony(test_config(10), small_params(10)).build().unwrap();
        let w = &sim.world;
        assert_eq!(w.agents.cat_count(), 10);
        // Rows 1..7, columns 1 and 3 of every block of four.
        assert_eq!(w.agents.houses().len(), 6 * 6);
        assert_eq!(
            w.activation.len(),
            w.agents.cat_count() + w.agents.houses().len() + w.agents.restaurants().len()
        );
        // Every cell carries exactly one terrain agent.
        assert_eq!(w.grid.agent_count(), 12 * 8 + 10);
        for x in 0..12 {
            for y in 0..8 {
                assert!(w.terrain_at(colony_core::GridPos::new(x, y)).is_some());
            }
        }
        assert_eq!(w.terrain_at(colony_core::GridPos::new(4, 0)), Some(Terrain::Street));
        w.check_consistency().unwrap();
    }

    #[test]
    fn invalid_probability_rejected() {
        let params = ModelParams { car_hit_prob: 2.0, ..small_params(3) };
        let result = SimBuilder::colony(test_config(10), params).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn degenerate_grid_rejected() {
        let params = ModelParams { width: 2, height: 2, ..small_params(3) };
        assert!(SimBuilder::colony(test_config(10), params).build().is_err());
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let config = SimConfig { tick_duration_secs: 0, ..test_config(10) };
        assert!(matches!(
            SimBuilder::colony(config, small_params(1)).build(),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn culling_cadence_from_hours() {
        let params = ModelParams { cat_removal_rate: 2.0, ..small_params(1) };
        let sim = SimBuilder::colony(test_config(10), params).build().unwrap();
        assert_eq!(sim.cull_every, Some(8));
        let sim = SimBuilder::colony(test_config(10), small_params(1)).build().unwrap();
        assert_eq!(sim.cull_every, None);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let mut sim = SimBuilder::colony(test_config(50), small_params(10)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(sim.current_tick(), Tick(50));
        assert_eq!(rec.metrics.len(), 50);
        assert_eq!(rec.ends, 50);
        assert_eq!(rec.last.unwrap().tick, Tick(50));
    }

    #[test]
    fn metrics_observed_before_mutation() {
        let mut sim = SimBuilder::colony(test_config(5), small_params(7)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(1, &mut rec).unwrap();
        let first = &rec.metrics[0];
        assert_eq!(first.tick, Tick(0));
        assert_eq!(first.cat_population, 7);
        assert_eq!(first.counters, colony_behavior::Counters::default());
    }

    #[test]
    fn snapshots_at_interval() {
        let config = SimConfig { output_interval_ticks: 10, ..test_config(30) };
        let mut sim = SimBuilder::colony(config, small_params(2)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(10), Tick(20)]);
    }

    #[test]
    fn same_seed_same_history() {
        let params = ModelParams { car_hit_prob: 0.01, ..small_params(20) };
        let mut a = SimBuilder::colony(test_config(300), params.clone()).build().unwrap();
        let mut b = SimBuilder::colony(test_config(300), params).build().unwrap();
        let mut ra = Recorder::default();
        let mut rb = Recorder::default();
        a.run(&mut ra).unwrap();
        b.run(&mut rb).unwrap();
        assert_eq!(ra.metrics, rb.metrics);
    }

    #[test]
    fn empty_colony_reports_zero_hunger() {
        let mut sim = SimBuilder::colony(test_config(3), small_params(0)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        for m in &rec.metrics {
            assert_eq!(m.hunger_fraction, 0.0);
            assert_eq!(m.min_ticks_until_hungry, None);
        }
    }
}

// ── Population invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use std::collections::HashMap;

    use colony_core::GridPos;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn roster_grid_and_activation_stay_in_sync() {
        let params = ModelParams { car_hit_prob: 0.05, cat_removal_rate: 3.0, ..small_params(30) };
        let mut sim = SimBuilder::colony(test_config(2_000), params).build().unwrap();
        for _ in 0..2_000 {
            sim.tick(&mut NoopObserver).unwrap();
            let w = &sim.world;
            let on_grid = w.agents.cats().iter().filter(|&&c| w.grid.contains(c)).count();
            let scheduled = w.agents.cats().iter().filter(|&&c| w.activation.contains(c)).count();
            assert_eq!(on_grid, w.agents.cat_count());
            assert_eq!(scheduled, w.agents.cat_count());
        }
        let m = sim.metrics();
        assert_eq!(
            m.cat_population as u64 + m.counters.hit + m.counters.removed,
            30 + m.counters.kittens_born
        );
    }

    #[test]
    fn queued_litters_hatch_together() {
        let mut sim = SimBuilder::new(test_config(10), small_params(4), NoopBehavior).build().unwrap();
        sim.world.kittens.push(Tick(5), 3);
        sim.world.kittens.push(Tick(5), 4);
        sim.run_ticks(4, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.agents.cat_count(), 4);
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.agents.cat_count(), 11);
        assert_eq!(sim.world.counters.kittens_born, 7);
        assert!(sim.world.kittens.is_empty());
        sim.world.check_consistency().unwrap();
    }

    #[test]
    fn culling_removes_one_cat_per_period() {
        let params = ModelParams { cat_removal_rate: 1.0, ..small_params(10) };
        let mut sim = SimBuilder::new(test_config(10), params, NoopBehavior).build().unwrap();
        sim.run_ticks(8, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.counters.removed, 2);
        assert_eq!(sim.world.agents.cat_count(), 8);
    }

    #[test]
    fn culling_an_empty_colony_is_harmless() {
        let params = ModelParams { cat_removal_rate: 0.25, ..small_params(0) };
        let mut sim = SimBuilder::new(test_config(10), params, NoopBehavior).build().unwrap();
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.counters.removed, 0);
    }

    #[test]
    fn sleeping_colony_stays_put() {
        let mut sim = SimBuilder::colony(test_config(10), small_params(25)).build().unwrap();
        let mut before = HashMap::new();
        for &id in sim.world.agents.cats().to_vec().iter() {
            let cat = sim.world.agents.cat_mut(id).unwrap();
            cat.is_asleep = true;
            cat.ticks_until_awake = 1_000;
            let pos: GridPos = sim.world.grid.position(id).unwrap();
            before.insert(id, pos);
        }
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.agents.cat_count(), 25);
        for (id, pos) in before {
            assert_eq!(sim.world.grid.position(id), Some(pos));
        }
    }

    #[test]
    fn houses_and_restaurants_step_every_tick() {
        let mut sim = SimBuilder::new(test_config(10), small_params(0), NoopBehavior).build().unwrap();
        let restaurants = sim.world.agents.restaurants().to_vec();
        let before: Vec<i64> = restaurants
            .iter()
            .map(|&r| sim.world.agents.restaurant(r).unwrap().ticks_until_new_mouse)
            .collect();
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        for (&r, &ticks) in restaurants.iter().zip(&before) {
            let now = sim.world.agents.restaurant(r).unwrap();
            if ticks > 1 {
                assert_eq!(now.ticks_until_new_mouse, ticks - 1);
            }
        }
    }
}
