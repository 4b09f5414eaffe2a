//! `colony-schedule`: who acts each tick, and which litters are pending.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`activation`]   | `Activation` (scheduled agents, shuffled every tick)     |
//! | [`kitten_queue`] | `KittenQueue` (`BTreeMap<Tick, u32>`, merging inserts)   |
//! | [`error`]        | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Tick model (summary)
//!
//! ```text
//! order   = activation.order(rng)      // fresh permutation every tick
//! for id in order { step(id) }         // agents removed mid-tick are skipped
//! tick   += 1
//! births  = kittens.take(tick)         // consumed exactly once
//! ```

pub mod activation;
pub mod error;
pub mod kitten_queue;


pub use activation::Activation;
pub use error::{ScheduleError, ScheduleResult};
pub use kitten_queue::KittenQueue;
