//! blobscan-region - Region analysis for binary images
//!
//! This crate provides the algorithmic core of blobscan:
//!
//! - **Connected component labeling** - Two-pass raster labeling with
//!   deferred equivalence resolution (4-connectivity)
//! - **Region extraction and filtering** - Per-region pixel sets with area
//!   thresholding
//! - **Shape descriptors** - Perimeter, centroid, bounding box, second-order
//!   moments, axis of elongation, eccentricity, compactness
//! - **Medial axis** - Approximate distance transform, skeleton extraction,
//!   and lossy reconstruction
//!
//! # Examples
//!
//! ## Analyzing a binary image
//!
//! ```
//! use blobscan_core::Grid;
//! use blobscan_region::{AnalysisOptions, analyze};
//!
//! let mut grid = Grid::from_binary(6, 4, vec![
//!     0, 1, 1, 0, 0, 0,
//!     0, 1, 1, 0, 0, 0,
//!     0, 0, 0, 0, 1, 0,
//!     0, 0, 0, 0, 1, 0,
//! ]).unwrap();
//!
//! let regions = analyze(&mut grid, &AnalysisOptions::new()).unwrap();
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[0].pixel_count(), 4);
//! ```
//!
//! ## Labeling only
//!
//! ```
//! use blobscan_core::Grid;
//! use blobscan_region::label_components;
//!
//! let mut grid = Grid::from_binary(4, 1, vec![1, 0, 1, 1]).unwrap();
//! let count = label_components(&mut grid).unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(grid.data(), &[2, 0, 3, 3]);
//! ```

pub mod component;
pub mod equiv;
pub mod error;
pub mod floodfill;
pub mod label;
pub mod medial;
pub mod pipeline;
pub mod shape;

// Re-export core types
pub use blobscan_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export labeling types and functions
pub use equiv::EquivalenceResolver;
pub use label::label_components;

// Re-export region types and functions
pub use component::{Region, extract_components, filter_by_min_area};

// Re-export shape types and functions
pub use shape::{
    ElongationAxis, ShapeStats, bounding_box, centroid, compactness, describe, elongation_axis,
    perimeter_pixels, second_moments,
};

// Re-export medial-axis types and functions
pub use medial::{DistanceMap, deskeletonize, skeletonize};

// Re-export flood-fill functions
pub use floodfill::flood_components;

// Re-export pipeline types and functions
pub use pipeline::{AnalysisOptions, analyze};
