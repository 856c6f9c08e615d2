use npc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("expected one {what} per agent ({expected} agents, {got} {what})")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
