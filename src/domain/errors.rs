// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by entities, value objects and repository traits.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input breaks an invariant: unknown status label, malformed approval
    /// payload, geometry tag mismatch.
    #[error("validation error: {0}")]
    Validation(String),
    /// The write collided with existing state, e.g. a second resolver
    /// reaching an already-resolved approval.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failed in a way the domain cannot interpret; the message
    /// carries the underlying cause for diagnostics.
    #[error("persistence error: {0}")]
    Persistence(String),
}
