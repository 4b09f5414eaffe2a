//! `colony-core`: foundational types for the urban cat colony simulation.
//!
//! This crate is a dependency of every other `colony-*` crate.  It has no
//! `colony-*` dependencies and only a handful of external ones (`rand`,
//! `rand_distr`, `serde`, `thiserror`).  Every public value type derives
//! `Serialize`/`Deserialize` so parameter files and snapshots can carry them.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`                                               |
//! | [`pos`]       | `GridPos`, Euclidean distance                           |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`                         |
//! | [`config`]    | `ModelParams` (the model's configuration bundle)        |
//! | [`rng`]       | `SimRng`: the single random source of a run             |
//! | [`error`]     | `ColonyError`, `ColonyResult`                           |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ModelParams;
pub use error::{ColonyError, ColonyResult};
pub use ids::AgentId;
pub use pos::GridPos;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
