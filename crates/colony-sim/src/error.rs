use thiserror::Error;

use colony_agent::AgentError;
use colony_behavior::BehaviorError;
use colony_core::ColonyError;
use colony_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] ColonyError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
