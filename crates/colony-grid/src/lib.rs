//! `colony-grid`: city layout and spatial grid.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`layout`] | `Terrain`, `Layout`, `generate_layout`                        |
//! | [`grid`]   | `MultiGrid` (cell → agent ids, toroidal neighborhoods)        |
//! | [`error`]  | `GridError`, `GridResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the agent position index.    |

pub mod error;
pub mod grid;
pub mod layout;


pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
pub use layout::{Layout, Terrain, generate_layout};
