use thiserror::Error;

use playground_core::DomainError;

/// Repository operation error.
///
/// Domain failures (mapping, validation) are passed through unchanged;
/// the other variants are **infrastructure errors** raised by the codec or the
/// storage backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
