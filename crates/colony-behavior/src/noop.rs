//! A no-op behavior model.

use colony_core::AgentId;

use crate::{BehaviorModel, BehaviorResult, World};

/// A [`BehaviorModel`] whose cats never wake, move or act.
///
/// Useful in tests that exercise the scheduler (culling, hatching,
/// resource agents) without cat dynamics in the way.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step_cat(&self, _cat: AgentId, _world: &mut World) -> BehaviorResult<()> {
        Ok(())
    }
}
