//! `World`: the whole mutable state of a run.
//!
//! # Ownership
//!
//! `colony_sim::Sim` owns exactly one `World` and lends it to behavior and
//! scheduler code as `&mut World`.  There is no other global state.
//!
//! # Membership invariant
//!
//! Every live agent is in the store and on the grid.  Every cat, house and
//! restaurant is also in the activation.  [`spawn`](World::spawn) and
//! [`remove_cat`](World::remove_cat) are the only paths that change
//! membership, and they update all three together.
//! [`check_consistency`](World::check_consistency) verifies it.

use colony_agent::{Agent, AgentRates, AgentStore, Cat, Sex};
use colony_core::{AgentId, GridPos, SimRng, Tick};
use colony_grid::{MultiGrid, Terrain};
use colony_schedule::{Activation, KittenQueue};

use crate::{BehaviorError, BehaviorResult, Counters};

pub struct World {
    /// Current tick.  Advanced by the simulation after all agents stepped.
    pub tick:       Tick,
    pub grid:       MultiGrid,
    pub agents:     AgentStore,
    pub activation: Activation,
    pub kittens:    KittenQueue,
    pub counters:   Counters,
    pub rng:        SimRng,
    /// Means used for every agent created during the run.
    pub rates:      AgentRates,
}

impl World {
    pub fn new(grid: MultiGrid, rates: AgentRates, rng: SimRng) -> Self {
        Self {
            tick: Tick::ZERO,
            grid,
            agents: AgentStore::new(),
            activation: Activation::new(),
            kittens: KittenQueue::new(),
            counters: Counters::default(),
            rng,
            rates,
        }
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Add `agent` at `pos`: arena, grid and (for active kinds) activation.
    pub fn spawn(&mut self, agent: Agent, pos: GridPos) -> BehaviorResult<AgentId> {
        if !self.grid.in_bounds(pos) {
            return Err(colony_grid::GridError::OutOfBounds(pos).into());
        }
        let scheduled = agent.is_scheduled();
        let id = self.agents.insert(agent)?;
        self.grid.place(id, pos)?;
        if scheduled {
            self.activation.add(id)?;
        }
        Ok(id)
    }

    /// A new adult cat with personal rates drawn from `self.rates`.
    pub fn spawn_cat(&mut self, sex: Sex, pos: GridPos) -> BehaviorResult<AgentId> {
        let cat = Cat::new(sex, &self.rates, &mut self.rng);
        self.spawn(Agent::Cat(cat), pos)
    }

    /// Take a cat out of the run: grid, activation and store in one call.
    pub fn remove_cat(&mut self, id: AgentId) -> BehaviorResult<Cat> {
        // Check the kind first so a bad id leaves everything untouched.
        self.agents.cat(id)?;
        self.grid.remove(id)?;
        self.activation.remove(id)?;
        match self.agents.remove(id)? {
            Agent::Cat(cat) => Ok(cat),
            other => Err(BehaviorError::Desync(format!("{id} turned into a {}", other.kind_name()))),
        }
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    pub fn cat_pos(&self, id: AgentId) -> BehaviorResult<GridPos> {
        self.grid
            .position(id)
            .ok_or(BehaviorError::Grid(colony_grid::GridError::NotPlaced(id)))
    }

    /// What the cell at `pos` is, judged by the first terrain agent in it.
    pub fn terrain_at(&self, pos: GridPos) -> Option<Terrain> {
        self.grid
            .cell(pos)
            .iter()
            .find_map(|&a| self.agents.get(a).and_then(Agent::terrain))
    }

    pub fn is_street(&self, pos: GridPos) -> bool {
        self.terrain_at(pos) == Some(Terrain::Street)
    }

    /// Cats in the cell at `pos`.
    pub fn cats_at(&self, pos: GridPos) -> Vec<AgentId> {
        self.grid
            .cell(pos)
            .iter()
            .copied()
            .filter(|&a| matches!(self.agents.get(a), Some(Agent::Cat(_))))
            .collect()
    }

    pub fn cat_count_at(&self, pos: GridPos) -> usize {
        self.grid
            .cell(pos)
            .iter()
            .filter(|&&a| matches!(self.agents.get(a), Some(Agent::Cat(_))))
            .count()
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify that grid, store rosters and activation describe the same
    /// population.
    pub fn check_consistency(&self) -> BehaviorResult<()> {
        if self.grid.agent_count() != self.agents.len() {
            return Err(BehaviorError::Desync(format!(
                "{} agents on the grid but {} in the store",
                self.grid.agent_count(),
                self.agents.len()
            )));
        }
        let active = self.agents.cats().len() + self.agents.houses().len() + self.agents.restaurants().len();
        if self.activation.len() != active {
            return Err(BehaviorError::Desync(format!(
                "{} agents scheduled but {} active agents in the rosters",
                self.activation.len(),
                active
            )));
        }
        for &id in self.agents.cats() {
            if !self.grid.contains(id) {
                return Err(BehaviorError::Desync(format!("cat {id} is not on the grid")));
            }
            if !self.activation.contains(id) {
                return Err(BehaviorError::Desync(format!("cat {id} is not scheduled")));
            }
        }
        for &id in self.activation.members() {
            match self.agents.get(id) {
                Some(agent) if agent.is_scheduled() => {}
                Some(agent) => {
                    return Err(BehaviorError::Desync(format!("{} {id} is scheduled", agent.kind_name())));
                }
                None => return Err(BehaviorError::Desync(format!("dead agent {id} is scheduled"))),
            }
        }
        Ok(())
    }
}
