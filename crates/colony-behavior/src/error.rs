use thiserror::Error;

use colony_agent::AgentError;
use colony_grid::GridError;
use colony_schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Grid, agent rosters and activation disagree about who exists.
    #[error("world out of sync: {0}")]
    Desync(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
