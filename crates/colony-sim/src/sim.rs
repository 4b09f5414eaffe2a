//! The `Sim` struct and its tick loop.

use tracing::{debug, info};

use colony_agent::{Agent, Sex};
use colony_behavior::{BehaviorModel, World};
use colony_core::{SimClock, SimConfig, Tick};

use crate::{SimObserver, SimResult, TickMetrics};

/// The main simulation runner.
///
/// `Sim<B>` holds the whole model state in one [`World`] and drives the tick
/// loop described in the crate docs.  All work within a tick is sequential;
/// every structural change (placement, removal, relocation) is complete
/// before the next agent steps.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Run configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock.  `world.tick` mirrors `clock.current_tick`.
    pub clock: SimClock,

    /// Grid, agents, activation, kitten queue, counters and RNG.
    pub world: World,

    /// The cat behavior.  Called once per live cat per tick.
    pub behavior: B,

    /// Culling cadence in ticks; `None` disables culling.
    pub cull_every: Option<u64>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let remaining = self.config.end_tick().0.saturating_sub(self.clock.current_tick.0);
        self.run_ticks(remaining, observer)?;
        let final_metrics = self.metrics();
        info!(
            tick = %self.clock,
            cats = final_metrics.cat_population,
            mice = final_metrics.mice_population,
            fights = final_metrics.counters.fights,
            hit = final_metrics.counters.hit,
            removed = final_metrics.counters.removed,
            kittens = final_metrics.counters.kittens_born,
            kittens_pending = self.world.kittens.pending(),
            "run finished"
        );
        observer.on_sim_end(&final_metrics);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Metrics for the current state.
    pub fn metrics(&self) -> TickMetrics {
        TickMetrics::collect(&self.world)
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Process one tick.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;

        // ── ① Observe ─────────────────────────────────────────────────────
        observer.on_tick_start(&TickMetrics::collect(&self.world));

        // ── ② Step every scheduled agent once ─────────────────────────────
        let stepped = self.step_agents()?;

        // ── ③ Advance ─────────────────────────────────────────────────────
        self.clock.advance();
        self.world.tick = self.clock.current_tick;

        // ── ④ Cull, ⑤ hatch ──────────────────────────────────────────────
        if let Some(every) = self.cull_every {
            if self.world.tick.0 % every == 0 {
                self.cull()?;
            }
        }
        self.hatch()?;

        self.world.check_consistency()?;

        observer.on_tick_end(now, stepped);
        if self.config.output_interval_ticks > 0 && now.0 % self.config.output_interval_ticks == 0 {
            observer.on_snapshot(now, &self.world);
        }
        Ok(())
    }

    /// Step every scheduled agent in a fresh random order.  Agents removed
    /// earlier in the same tick are skipped.
    fn step_agents(&mut self) -> SimResult<usize> {
        let order = self.world.activation.order(&mut self.world.rng);
        let mut stepped = 0;
        for id in order {
            if !self.world.activation.contains(id) {
                continue;
            }
            let is_cat = matches!(self.world.agents.get(id), Some(Agent::Cat(_)));
            if is_cat {
                self.behavior.step_cat(id, &mut self.world)?;
            } else {
                match self.world.agents.get_mut(id) {
                    Some(Agent::House(house)) => house.step(&mut self.world.rng),
                    Some(Agent::Restaurant(restaurant)) => restaurant.step(&mut self.world.rng),
                    _ => continue,
                }
            }
            stepped += 1;
        }
        Ok(stepped)
    }

    /// Remove one uniformly random live cat.
    fn cull(&mut self) -> SimResult<()> {
        let Some(&victim) = self.world.rng.choose(self.world.agents.cats()) else {
            return Ok(());
        };
        self.world.remove_cat(victim)?;
        self.world.counters.removed += 1;
        debug!(cat = %victim, tick = %self.world.tick, "cat removed by policy");
        Ok(())
    }

    /// Turn the litters maturing at the current tick into cats at random
    /// cells.
    fn hatch(&mut self) -> SimResult<()> {
        let count = self.world.kittens.take(self.world.tick);
        for _ in 0..count {
            let pos = self.world.grid.random_cell(&mut self.world.rng);
            let sex = Sex::random(&mut self.world.rng);
            self.world.spawn_cat(sex, pos)?;
        }
        if count > 0 {
            self.world.counters.kittens_born += count as u64;
            debug!(count, tick = %self.world.tick, "kittens joined the colony");
        }
        Ok(())
    }
}
