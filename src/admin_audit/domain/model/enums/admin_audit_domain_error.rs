use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminAuditDomainError {
    #[error("audit action is invalid; use a non-empty [a-z][a-z0-9_] token of at most 64 chars")]
    InvalidActionName,

    #[error("audit resource is invalid; use a non-empty [a-z][a-z0-9_] token of at most 64 chars")]
    InvalidResourceName,

    #[error("audit outcome is invalid; use success or failure")]
    InvalidOutcome,

    #[error("page must be >= 1 and page_size must be within 1..=100")]
    InvalidPagination,

    #[error("time window is invalid; from must not be after to")]
    InvalidTimeWindow,

    #[error("audit details could not be serialized: {0}")]
    DetailsSerialization(String),

    #[error("audit store unavailable: {0}")]
    StoreUnavailable(String),
}
