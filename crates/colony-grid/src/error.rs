//! Grid error type.

use thiserror::Error;

use colony_core::{AgentId, GridPos};

/// Errors produced by `colony-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid {width}x{height} is too small: both sides must be at least {min}")]
    TooSmall { width: u32, height: u32, min: u32 },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(GridPos),

    #[error("{0} is already placed on the grid")]
    AlreadyPlaced(AgentId),

    #[error("{0} is not on the grid")]
    NotPlaced(AgentId),
}

pub type GridResult<T> = Result<T, GridError>;
