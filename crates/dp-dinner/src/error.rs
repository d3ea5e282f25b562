use dp_core::{DpError, PhilosopherId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DinnerError {
    #[error("dinner configuration error: {0}")]
    Config(#[from] DpError),

    #[error("failed to start philosopher {id}")]
    Spawn {
        id:     PhilosopherId,
        #[source]
        source: std::io::Error,
    },

    #[error("philosopher {0} panicked")]
    PhilosopherPanicked(PhilosopherId),
}

pub type DinnerResult<T> = Result<T, DinnerError>;
