use thiserror::Error;

use crate::storage::StorageError;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type. Load paths never surface these; mutations do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of a mutation addressed at an entity by id.
///
/// A miss is not an error: the collection and the backend are left
/// exactly as they were, and the caller decides whether that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The target existed and the change was persisted.
    Applied,
    /// No entity matched the given id; nothing was written.
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}
