use thiserror::Error;

use colony_core::AgentId;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} not found")]
    NotFound(AgentId),

    #[error("agent {id} is a {actual}, expected a {expected}")]
    WrongKind {
        id:       AgentId,
        expected: &'static str,
        actual:   &'static str,
    },

    #[error("agent arena is full ({0} slots)")]
    Exhausted(usize),
}

pub type AgentResult<T> = Result<T, AgentError>;
