//! `colony-behavior`: what cats do each tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`world`]    | `World`: grid, agents, activation, litters, counters, RNG     |
//! | [`counters`] | `Counters`: cumulative demographic event counts               |
//! | [`rules`]    | `CatRules`: thresholds and probabilities on the tick basis    |
//! | [`model`]    | `BehaviorModel` trait                                         |
//! | [`cat`]      | `CatBehavior`: the colony cat state machine                   |
//! | [`noop`]     | `NoopBehavior`: cats that never do anything                   |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Step model
//!
//! A cat's step is
//!
//! ```text
//! update_state()              // sleep, hunger and gestation timers
//! if awake { move(); act() }  // act: hazard → fight → mate → feed
//! ```
//!
//! Steps run one at a time against `&mut World`, so every grid or roster
//! change made by one cat is visible to the next cat in the same tick.

pub mod cat;
pub mod counters;
pub mod error;
pub mod model;
pub mod noop;
pub mod rules;
pub mod world;


pub use cat::CatBehavior;
pub use counters::Counters;
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use rules::CatRules;
pub use world::World;
