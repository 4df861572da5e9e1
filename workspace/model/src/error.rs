use thiserror::Error;

/// Error types for the model crate
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The snapshot violates one or more hard invariants
    #[error("Dataset is invalid: {count} error(s), first: {first}")]
    Invalid { count: usize, first: String },

    /// The snapshot could not be decoded
    #[error("Failed to decode dataset: {0}")]
    Decode(String),
}

/// Result type for the model crate
pub type Result<T> = std::result::Result<T, DatasetError>;
