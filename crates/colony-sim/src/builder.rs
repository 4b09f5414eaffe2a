//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use colony_agent::{Agent, AgentRates, House, Restaurant, Sex};
use colony_behavior::{BehaviorModel, CatBehavior, CatRules, World};
use colony_core::{ModelParams, SimConfig, SimRng};
use colony_grid::{generate_layout, MultiGrid, Terrain};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration, snapshot cadence
/// - [`ModelParams`]: grid size, population, rates, probabilities
/// - `B: BehaviorModel`: the cat behavior ([`SimBuilder::colony`] supplies
///   [`CatBehavior`])
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                   |
/// |---------------|-------------------------------------------|
/// | `.torus(b)`   | `true` (edges wrap)                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::colony(config, params).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    params:   ModelParams,
    behavior: B,
    torus:    bool,
}

impl SimBuilder<CatBehavior> {
    /// Builder for the colony model with its standard cat behavior.
    pub fn colony(config: SimConfig, params: ModelParams) -> Self {
        let rules = CatRules::new(&params, &config.make_clock());
        Self::new(config, params, CatBehavior::new(rules))
    }
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, params: ModelParams, behavior: B) -> Self {
        Self { config, params, behavior, torus: true }
    }

    /// Wrap the grid edges (the default) or clip neighborhoods at them.
    pub fn torus(mut self, torus: bool) -> Self {
        self.torus = torus;
        self
    }

    /// Validate inputs, lay out the city, populate it and return a
    /// ready-to-run [`Sim`].
    ///
    /// Construction order: layout draws, then one house or restaurant per
    /// lot in layout order, then the initial cats at uniformly random cells.
    /// All of it comes from the single run RNG.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.params.validate()?;
        if self.config.tick_duration_secs == 0 {
            return Err(SimError::Config("tick_duration_secs must be positive".into()));
        }

        let params = &self.params;
        let clock = self.config.make_clock();
        let mut rng = SimRng::new(self.config.seed);

        let layout = generate_layout(params.width, params.height, &mut rng)?;
        let grid = MultiGrid::new(params.width, params.height, self.torus)?;
        if layout.len() != grid.cell_count() {
            return Err(SimError::Config(format!(
                "layout covers {} of {} cells",
                layout.len(),
                grid.cell_count()
            )));
        }
        let rates = AgentRates::from_params(params, &clock);
        let mut world = World::new(grid, rates, rng);

        // ── Terrain and resource agents ───────────────────────────────────
        for (terrain, pos) in layout.iter() {
            let agent = match terrain {
                Terrain::House => Agent::House(House::new(&world.rates, &mut world.rng)),
                Terrain::Restaurant => Agent::Restaurant(Restaurant::new(&world.rates, &mut world.rng)),
                other => Agent::marker(other)
                    .ok_or_else(|| SimError::Config(format!("no marker for terrain {other}")))?,
            };
            world.spawn(agent, pos)?;
        }

        // ── Initial cats ──────────────────────────────────────────────────
        for _ in 0..params.num_cats {
            let pos = world.grid.random_cell(&mut world.rng);
            let sex = Sex::random(&mut world.rng);
            world.spawn_cat(sex, pos)?;
        }

        world.check_consistency()?;

        let cull_every = if params.cat_removal_rate > 0.0 {
            Some(clock.ticks_for_hours(params.cat_removal_rate).max(1))
        } else {
            None
        };

        info!(
            width = params.width,
            height = params.height,
            cats = world.agents.cat_count(),
            houses = world.agents.houses().len(),
            feeding_houses = world
                .agents
                .houses()
                .iter()
                .filter(|&&h| world.agents.house(h).is_ok_and(|house| house.puts_food))
                .count(),
            restaurants = world.agents.restaurants().len(),
            streets = layout.cells_of(Terrain::Street).len(),
            cull_every = ?cull_every,
            seed = self.config.seed,
            "colony model built"
        );

        Ok(Sim {
            clock,
            config: self.config,
            world,
            behavior: self.behavior,
            cull_every,
        })
    }
}
