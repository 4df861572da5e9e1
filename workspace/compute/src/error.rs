use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A preference could not be read from the key-value store
    #[error("Failed to read preference '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    /// A preference could not be written to the key-value store
    #[error("Failed to persist preference '{key}': {reason}")]
    StorageWrite { key: String, reason: String },
}

/// Result type for compute operations
pub type Result<T> = std::result::Result<T, ComputeError>;
