use thiserror::Error;

/// Errors that can occur when interacting with the collection store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred reading or writing a collection document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization/deserialization error occurred.
    ///
    /// Malformed persisted data surfaces here; reads fail fast rather than
    /// falling back to an empty collection.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
