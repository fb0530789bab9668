use thiserror::Error;

/// Failures the sorter can surface. Every one is fatal: `main` prints the
/// message and exits non-zero.
#[derive(Debug, Error)]
pub enum SortError {
    /// The document is missing entirely or its top-level `item` collection
    /// is not an array.
    #[error("Invalid Postman collection format")]
    InvalidFormat,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Fallback for failures that carry no message of their own.
    #[error("Unknown error occurred")]
    Unknown,
}
