use thiserror::Error;

/// Failures the effects can run into. None of these are fatal: callers log
/// them and degrade to "effect not applied".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("missing target element #{0}")]
    MissingTarget(&'static str),
    #[error("write to {target} rejected: {reason}")]
    UnsupportedWrite {
        target: &'static str,
        reason: String,
    },
    #[error("scheduling failed: {0}")]
    Schedule(String),
}

pub type FxResult<T> = Result<T, FxError>;
