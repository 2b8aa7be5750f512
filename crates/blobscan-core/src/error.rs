//! Error types for blobscan-core
//!
//! Provides a unified error type for grid and rectangle construction.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Blobscan core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data length does not match the declared dimensions
    #[error("bad pixel data length: expected {expected}, got {actual}")]
    BadLength { expected: usize, actual: usize },

    /// Binary grid contains a value other than 0 or 1
    #[error("non-binary value {value} at pixel index {index}")]
    NotBinary { index: usize, value: u32 },

    /// Pixel index out of bounds
    #[error("pixel index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for blobscan-core operations
pub type Result<T> = std::result::Result<T, Error>;
