//! Region extraction and area filtering
//!
//! After labeling, every foreground pixel carries a final region label. The
//! extractor groups the label grid's pixels into per-region pixel lists in a
//! single pass; the filter then drops regions under an area threshold,
//! returning their pixels to background, so that no descriptor work is spent
//! on rejected speckle.

use crate::error::{RegionError, RegionResult};
use crate::shape::ShapeStats;
use blobscan_core::{BACKGROUND, FIRST_LABEL, Grid};
use std::collections::BTreeMap;

/// A connected region of foreground pixels.
///
/// Created with only its pixel list populated; the perimeter, medial-axis
/// map, and shape statistics are filled in by the descriptor stages. All of
/// this data is derived from the grid, never authoritative: until filtering
/// finalizes the grid, the grid decides pixel ownership.
#[derive(Debug, Clone, Default)]
pub struct Region {
    /// Final region label in the grid (>= [`FIRST_LABEL`])
    pub label: u32,
    /// Linear pixel indices belonging to this region, in raster order
    pub pixels: Vec<usize>,
    /// Subset of `pixels` on the region's outer boundary
    pub perimeter: Vec<usize>,
    /// Medial-axis pixels with their distance values
    pub medial_axis: BTreeMap<usize, u32>,
    /// Shape descriptors, once computed
    pub shape: Option<ShapeStats>,
}

impl Region {
    /// Create an empty region for the given label.
    pub fn new(label: u32) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Number of pixels in the region (its area).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

/// Group the pixels of a final label grid into regions.
///
/// One pass over the grid; the result is ordered by ascending final label,
/// so `regions[k]` holds label `FIRST_LABEL + k`.
///
/// # Errors
///
/// Returns [`RegionError::UnknownLabel`] if a pixel carries a label outside
/// the declared range, and [`RegionError::EmptyRegion`] if a declared label
/// has no pixels. Both indicate a labeling bug, not bad input.
pub fn extract_components(grid: &Grid, count: u32) -> RegionResult<Vec<Region>> {
    let mut regions: Vec<Region> = (0..count).map(|k| Region::new(FIRST_LABEL + k)).collect();

    for (i, &v) in grid.data().iter().enumerate() {
        if v < FIRST_LABEL {
            continue;
        }
        let slot = (v - FIRST_LABEL) as usize;
        match regions.get_mut(slot) {
            Some(region) => region.pixels.push(i),
            None => return Err(RegionError::UnknownLabel(v)),
        }
    }

    if regions.iter().any(|r| r.pixels.is_empty()) {
        return Err(RegionError::EmptyRegion);
    }
    Ok(regions)
}

/// Remove every region whose area is strictly below `min_area`.
///
/// Pixels of removed regions are reset to background in the grid, so the
/// grid and the surviving regions stay a consistent partition. Surviving
/// regions keep their order. Returns the number of regions removed.
pub fn filter_by_min_area(grid: &mut Grid, regions: &mut Vec<Region>, min_area: usize) -> usize {
    let before = regions.len();
    regions.retain(|region| {
        if region.pixel_count() >= min_area {
            return true;
        }
        for &i in &region.pixels {
            grid.data_mut()[i] = BACKGROUND;
        }
        false
    });
    before - regions.len()
}
