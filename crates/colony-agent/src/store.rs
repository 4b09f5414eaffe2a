//! The agent arena.
//!
//! # Layout
//!
//! Agents live in a `Vec<Option<Agent>>` indexed by `AgentId`.  Ids are
//! handed out sequentially and never reused; removing an agent leaves a
//! `None` slot behind.  Three rosters list the live cats, houses and
//! restaurants so per-kind scans skip terrain markers.
//!
//! `insert` and `remove` are the only ways in and out, and both update the
//! matching roster in the same call, so arena and rosters cannot disagree.

use colony_core::AgentId;

use crate::{Agent, AgentError, AgentResult, Cat, House, Restaurant};

#[derive(Default)]
pub struct AgentStore {
    slots:       Vec<Option<Agent>>,
    cats:        Vec<AgentId>,
    houses:      Vec<AgentId>,
    restaurants: Vec<AgentId>,
    live:        usize,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Insertion / removal ───────────────────────────────────────────────

    /// Add an agent and return its freshly allocated id.
    pub fn insert(&mut self, agent: Agent) -> AgentResult<AgentId> {
        let id = AgentId::try_from(self.slots.len())
            .ok()
            .filter(|id| *id != AgentId::INVALID)
            .ok_or(AgentError::Exhausted(self.slots.len()))?;

        match &agent {
            Agent::Cat(_)        => self.cats.push(id),
            Agent::House(_)      => self.houses.push(id),
            Agent::Restaurant(_) => self.restaurants.push(id),
            Agent::Street | Agent::Backyard | Agent::Shop => {}
        }
        self.slots.push(Some(agent));
        self.live += 1;
        Ok(id)
    }

    /// Take an agent out of the arena and its roster.
    pub fn remove(&mut self, id: AgentId) -> AgentResult<Agent> {
        let agent = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(AgentError::NotFound(id))?;

        let roster = match &agent {
            Agent::Cat(_)        => Some(&mut self.cats),
            Agent::House(_)      => Some(&mut self.houses),
            Agent::Restaurant(_) => Some(&mut self.restaurants),
            Agent::Street | Agent::Backyard | Agent::Shop => None,
        };
        if let Some(roster) = roster {
            if let Some(i) = roster.iter().position(|&a| a == id) {
                roster.swap_remove(i);
            }
        }
        self.live -= 1;
        Ok(agent)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.get(id).is_some()
    }

    pub fn cat(&self, id: AgentId) -> AgentResult<&Cat> {
        match self.get(id) {
            Some(Agent::Cat(cat)) => Ok(cat),
            Some(other) => Err(wrong_kind(id, "cat", other)),
            None => Err(AgentError::NotFound(id)),
        }
    }

    pub fn cat_mut(&mut self, id: AgentId) -> AgentResult<&mut Cat> {
        match self.get_mut(id) {
            Some(Agent::Cat(cat)) => Ok(cat),
            Some(other) => Err(wrong_kind(id, "cat", other)),
            None => Err(AgentError::NotFound(id)),
        }
    }

    pub fn house(&self, id: AgentId) -> AgentResult<&House> {
        match self.get(id) {
            Some(Agent::House(house)) => Ok(house),
            Some(other) => Err(wrong_kind(id, "house", other)),
            None => Err(AgentError::NotFound(id)),
        }
    }

    pub fn house_mut(&mut self, id: AgentId) -> AgentResult<&mut House> {
        match self.get_mut(id) {
            Some(Agent::House(house)) => Ok(house),
            Some(other) => Err(wrong_kind(id, "house", other)),
            None => Err(AgentError::NotFound(id)),
        }
    }

    pub fn restaurant(&self, id: AgentId) -> AgentResult<&Restaurant> {
        match self.get(id) {
            Some(Agent::Restaurant(r)) => Ok(r),
            Some(other) => Err(wrong_kind(id, "restaurant", other)),
            None => Err(AgentError::NotFound(id)),
        }
    }

    pub fn restaurant_mut(&mut self, id: AgentId) -> AgentResult<&mut Restaurant> {
        match self.get_mut(id) {
            Some(Agent::Restaurant(r)) => Ok(r),
            Some(other) => Err(wrong_kind(id, "restaurant", other)),
            None => Err(AgentError::NotFound(id)),
        }
    }

    // ── Rosters ───────────────────────────────────────────────────────────

    /// Live cats, in no particular order.
    pub fn cats(&self) -> &[AgentId] {
        &self.cats
    }

    pub fn houses(&self) -> &[AgentId] {
        &self.houses
    }

    pub fn restaurants(&self) -> &[AgentId] {
        &self.restaurants
    }

    /// `(id, cat)` for every live cat.
    pub fn iter_cats(&self) -> impl Iterator<Item = (AgentId, &Cat)> + '_ {
        self.cats
            .iter()
            .filter_map(move |&id| self.get(id).and_then(Agent::as_cat).map(|cat| (id, cat)))
    }

    pub fn iter_restaurants(&self) -> impl Iterator<Item = (AgentId, &Restaurant)> + '_ {
        self.restaurants.iter().filter_map(move |&id| match self.get(id) {
            Some(Agent::Restaurant(r)) => Some((id, r)),
            _ => None,
        })
    }

    pub fn cat_count(&self) -> usize {
        self.cats.len()
    }

    /// Live agents of every kind.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

fn wrong_kind(id: AgentId, expected: &'static str, actual: &Agent) -> AgentError {
    AgentError::WrongKind { id, expected, actual: actual.kind_name() }
}
