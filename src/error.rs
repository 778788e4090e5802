use thiserror::Error;

/// Errors raised by the trial engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid trial count: {0} (aggregate mode needs at least one trial)")]
    InvalidTrialCount(u64),

    #[error("unknown strategy: {0:?} (expected one of A, B, C)")]
    UnknownStrategy(String),
}
