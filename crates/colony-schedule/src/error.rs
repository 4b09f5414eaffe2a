use thiserror::Error;

use colony_core::AgentId;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{0} is already scheduled")]
    AlreadyScheduled(AgentId),

    #[error("{0} is not scheduled")]
    NotScheduled(AgentId),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
