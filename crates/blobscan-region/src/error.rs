//! Error types for blobscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobscan_core::Error),

    /// A label was passed to the equivalence resolver without ever having
    /// been allocated. This indicates a bug in the labeling pass, not a
    /// data problem, and is never silently recovered.
    #[error("unknown provisional label: {0}")]
    UnknownLabel(u32),

    /// Group index out of range when enumerating equivalence groups
    #[error("equivalence group index out of range: {index} >= {count}")]
    GroupIndexOutOfRange { index: usize, count: usize },

    /// An empty region reached a stage that requires pixels
    #[error("empty region: no pixels to process")]
    EmptyRegion,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
