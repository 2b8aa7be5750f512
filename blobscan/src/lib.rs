//! Blobscan - Binary image region analysis for Rust
//!
//! # Overview
//!
//! Blobscan analyzes binary raster images and provides:
//!
//! - Connected-component labeling (two-pass, 4-connectivity)
//! - Per-region shape descriptors (centroid, bounding box, moments,
//!   elongation axis, eccentricity, compactness)
//! - Approximate medial-axis extraction with lossy reconstruction
//! - A one-call analysis pipeline with area filtering
//!
//! # Example
//!
//! ```
//! use blobscan::Grid;
//! use blobscan::region::{AnalysisOptions, analyze};
//!
//! let mut grid = Grid::from_binary(
//!     4,
//!     3,
//!     vec![
//!         1, 1, 0, 1, //
//!         1, 1, 0, 1, //
//!         0, 0, 0, 1, //
//!     ],
//! )
//! .unwrap();
//!
//! let regions = analyze(&mut grid, &AnalysisOptions::default()).unwrap();
//! assert_eq!(regions.len(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobscan_core::*;

// Re-export the region-analysis crate as a module
pub use blobscan_region as region;
