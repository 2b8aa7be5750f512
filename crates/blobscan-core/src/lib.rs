//! blobscan-core - Basic data structures for binary-image region analysis
//!
//! This crate provides the fundamental data structures used throughout the
//! blobscan library:
//!
//! - [`Grid`] - Flat row-major pixel container, serving both the binary-image
//!   and label-image roles
//! - [`Rect`] - Rectangle regions (bounding boxes, scratch windows)
//!
//! # Examples
//!
//! ```
//! use blobscan_core::Grid;
//!
//! // A 4x3 binary image with two foreground pixels
//! let grid = Grid::from_binary(4, 3, vec![
//!     0, 1, 0, 0,
//!     0, 1, 0, 0,
//!     0, 0, 0, 0,
//! ]).unwrap();
//! assert_eq!(grid.width(), 4);
//! assert_eq!(grid.height(), 3);
//! ```

pub mod error;
pub mod grid;
pub mod rect;

pub use error::{Error, Result};
pub use grid::{BACKGROUND, FIRST_LABEL, Grid, UNLABELED};
pub use rect::Rect;
