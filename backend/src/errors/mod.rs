use thiserror::Error;

/// A roster names a player the reference table cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Player {0} not found.")]
    UnknownPlayer(String),

    #[error("Player {0} matches more than one reference record.")]
    AmbiguousPlayer(String),
}

/// Failure of an orchestration step, split by who is at fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
