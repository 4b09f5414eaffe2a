//! `Activation`: the set of agents stepped every tick.
//!
//! Every scheduled agent is activated exactly once per tick, in a fresh
//! uniformly random order.  Membership changes during a tick (a cat hit by a
//! car, a cat removed by policy) take effect immediately: `contains` reports
//! the removal, and the tick loop skips ids that are no longer scheduled
//! when it reaches them in the precomputed order.

use colony_core::{AgentId, SimRng};

use crate::{ScheduleError, ScheduleResult};

#[cfg(feature = "fx-hash")]
type MemberSet = rustc_hash::FxHashSet<AgentId>;
#[cfg(not(feature = "fx-hash"))]
type MemberSet = std::collections::HashSet<AgentId>;

#[derive(Default)]
pub struct Activation {
    members: Vec<AgentId>,
    index:   MemberSet,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, agent: AgentId) -> ScheduleResult<()> {
        if !self.index.insert(agent) {
            return Err(ScheduleError::AlreadyScheduled(agent));
        }
        self.members.push(agent);
        Ok(())
    }

    pub fn remove(&mut self, agent: AgentId) -> ScheduleResult<()> {
        if !self.index.remove(&agent) {
            return Err(ScheduleError::NotScheduled(agent));
        }
        if let Some(i) = self.members.iter().position(|&a| a == agent) {
            self.members.swap_remove(i);
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.index.contains(&agent)
    }

    /// This tick's activation order: a shuffled copy of the members.
    ///
    /// Members are kept in insertion order (modulo removals) and shuffled
    /// from scratch, so the order depends only on the RNG stream.
    pub fn order(&self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order = self.members.clone();
        rng.shuffle(&mut order);
        order
    }

    pub fn members(&self) -> &[AgentId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
