//! Error types for data-source operations.

use crate::entity::EntityId;
use crate::set::EntitySet;

/// Alias for `Result<T, SourceError>`.
pub type CoreResult<T> = Result<T, SourceError>;

/// Errors a data source can report.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The requested set could not be fetched.
    #[error("entity set unavailable: {0}")]
    SetUnavailable(EntitySet),

    /// The requested entity ID is unknown to this source.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// A roster file could not be parsed.
    #[error("malformed roster: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A roster file could not be read.
    #[error("roster io error: {0}")]
    Io(#[from] std::io::Error),
}
