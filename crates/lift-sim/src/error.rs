use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// A run (or a configuration) that can never deliver anyone, so no
    /// wait-time statistics exist.
    #[error("no passengers delivered: {0}")]
    NoPassengersDelivered(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
