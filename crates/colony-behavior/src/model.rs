//! The `BehaviorModel` trait.

use colony_core::AgentId;

use crate::{BehaviorResult, World};

/// Pluggable cat behavior.
///
/// The simulation calls [`step_cat`][Self::step_cat] once per live cat per
/// tick, in the tick's shuffled activation order.  Houses and restaurants
/// are stepped by the simulation itself; they do not depend on the model.
///
/// Implementations may remove the stepping cat (or any other) through
/// [`World::remove_cat`], which keeps grid, store and activation in sync.
///
/// # Example
///
/// ```rust,ignore
/// struct Homebody;
///
/// impl BehaviorModel for Homebody {
///     fn step_cat(&self, cat: AgentId, world: &mut World) -> BehaviorResult<()> {
///         world.agents.cat_mut(cat)?.advance_hunger();
///         Ok(())
///     }
/// }
/// ```
pub trait BehaviorModel {
    fn step_cat(&self, cat: AgentId, world: &mut World) -> BehaviorResult<()>;
}
