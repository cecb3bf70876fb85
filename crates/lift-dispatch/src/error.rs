use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown dispatch policy '{0}' (expected random, nearest-destination or lookahead-optimal)")]
    UnknownPolicy(String),
}
