//! `colony-sim`: the cat colony model and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Observe: collect TickMetrics from the state left by the last tick.
//!   ② Step:    every cat, house and restaurant once, freshly shuffled.
//!              Cats go through the BehaviorModel; houses and restaurants
//!              step themselves.
//!   ③ Advance: tick += 1.
//!   ④ Cull:    every `cat_removal_rate` hours, one random cat is removed.
//!   ⑤ Hatch:   kittens maturing at the new tick join the population.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use colony_core::{ModelParams, SimConfig};
//! use colony_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::colony(SimConfig::default(), ModelParams::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} cats left", sim.world.agents.cat_count());
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::TickMetrics;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
