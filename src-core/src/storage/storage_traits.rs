use async_trait::async_trait;
use thiserror::Error;

/// Errors a storage backend can raise.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Asynchronous string key-value store the app persists into.
///
/// Keys and values are opaque strings; a missing key reads as `None` and
/// removing a missing key succeeds. Implementations decide where values
/// actually live (process memory, files, a platform bridge).
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
