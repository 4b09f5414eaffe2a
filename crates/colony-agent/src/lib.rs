//! `colony-agent`: every entity of the cat colony model and the arena that
//! owns them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` tagged variant, `Sex`                             |
//! | [`cat`]         | `Cat` state (hunger, sleep, reproduction timers)          |
//! | [`house`]       | `House` food bowl                                         |
//! | [`restaurant`]  | `Restaurant` mouse colony                                 |
//! | [`rates`]       | `AgentRates`: model parameters converted to tick means    |
//! | [`store`]       | `AgentStore` arena with cat / house / restaurant rosters  |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! Agents never hold references to each other or to the grid; everything is
//! addressed by `AgentId`, and positions live in `colony_grid::MultiGrid`.

pub mod agent;
pub mod cat;
pub mod error;
pub mod house;
pub mod rates;
pub mod restaurant;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Sex};
pub use cat::{Cat, FoodKind, FoundFood};
pub use error::{AgentError, AgentResult};
pub use house::House;
pub use rates::AgentRates;
pub use restaurant::Restaurant;
pub use store::AgentStore;
