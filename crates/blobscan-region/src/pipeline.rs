//! End-to-end region analysis pipeline
//!
//! Runs labeling, extraction, area filtering, and the per-region descriptor
//! stages over one binary grid. Which descriptors run is chosen once up
//! front through [`AnalysisOptions`] rather than threaded through every call
//! as boolean parameters. Filtering happens before descriptor work so no
//! effort is spent on rejected regions.

use crate::component::{Region, extract_components, filter_by_min_area};
use crate::error::RegionResult;
use crate::label::label_components;
use crate::medial::DistanceMap;
use crate::shape;
use blobscan_core::Grid;

/// Options for a pipeline run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Minimum region area in pixels; regions strictly below it are removed
    /// (inclusive lower bound for survival)
    pub min_area: usize,
    /// Compute perimeter and shape statistics per region
    pub shape: bool,
    /// Compute the distance transform and medial-axis map per region
    pub medial_axis: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_area: 1,
            shape: true,
            medial_axis: true,
        }
    }
}

impl AnalysisOptions {
    /// Create options with all descriptors enabled and no area filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum region area.
    pub fn with_min_area(mut self, min_area: usize) -> Self {
        self.min_area = min_area;
        self
    }

    /// Enable or disable shape statistics.
    pub fn with_shape(mut self, shape: bool) -> Self {
        self.shape = shape;
        self
    }

    /// Enable or disable the medial-axis map.
    pub fn with_medial_axis(mut self, medial_axis: bool) -> Self {
        self.medial_axis = medial_axis;
        self
    }
}

/// Analyze a binary grid: label it in place, then return its surviving
/// regions with the requested descriptors computed.
///
/// On return the grid is a finalized label grid (filtered pixels reset to
/// background) and is treated as read-only by all descriptor stages.
///
/// # Examples
///
/// ```
/// use blobscan_core::Grid;
/// use blobscan_region::{AnalysisOptions, analyze};
///
/// let mut grid = Grid::from_binary(6, 3, vec![
///     1, 1, 0, 0, 0, 1,
///     1, 1, 0, 0, 0, 0,
///     0, 0, 0, 0, 0, 0,
/// ]).unwrap();
///
/// let regions = analyze(&mut grid, &AnalysisOptions::new().with_min_area(2)).unwrap();
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].pixel_count(), 4);
/// ```
pub fn analyze(grid: &mut Grid, options: &AnalysisOptions) -> RegionResult<Vec<Region>> {
    let count = label_components(grid)?;
    let mut regions = extract_components(grid, count)?;
    filter_by_min_area(grid, &mut regions, options.min_area);

    for region in &mut regions {
        if options.shape {
            shape::describe(grid, region)?;
        }
        if options.medial_axis {
            let dist = DistanceMap::compute(grid, &region.pixels)?;
            region.medial_axis = dist.medial_axis(&region.pixels);
        }
    }

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_separated_squares() {
        #[rustfmt::skip]
        let mut grid = Grid::from_binary(7, 3, vec![
            1, 1, 0, 0, 0, 1, 1,
            1, 1, 0, 0, 0, 1, 1,
            0, 0, 0, 0, 0, 0, 0,
        ]).unwrap();
        let regions = analyze(&mut grid, &AnalysisOptions::new()).unwrap();

        assert_eq!(regions.len(), 2);
        let mut seen: Vec<usize> = Vec::new();
        for region in &regions {
            assert_eq!(region.pixel_count(), 4);
            seen.extend(&region.pixels);
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_descriptors_follow_options() {
        let mut grid = Grid::from_binary(3, 3, vec![0, 1, 0, 1, 1, 1, 0, 1, 0]).unwrap();
        let regions = analyze(
            &mut grid,
            &AnalysisOptions::new().with_shape(false).with_medial_axis(false),
        )
        .unwrap();

        assert_eq!(regions.len(), 1);
        assert!(regions[0].shape.is_none());
        assert!(regions[0].perimeter.is_empty());
        assert!(regions[0].medial_axis.is_empty());
    }

    #[test]
    fn test_filtered_pixels_become_background() {
        #[rustfmt::skip]
        let mut grid = Grid::from_binary(5, 3, vec![
            1, 1, 0, 1, 0,
            1, 1, 0, 0, 0,
            0, 0, 0, 0, 0,
        ]).unwrap();
        let regions = analyze(&mut grid, &AnalysisOptions::new().with_min_area(2)).unwrap();

        assert_eq!(regions.len(), 1);
        assert_eq!(grid.get(3), Some(0));
    }

    #[test]
    fn test_default_keeps_single_pixels() {
        let mut grid = Grid::from_binary(3, 1, vec![1, 0, 1]).unwrap();
        let regions = analyze(&mut grid, &AnalysisOptions::default()).unwrap();
        assert_eq!(regions.len(), 2);
        for region in &regions {
            let shape = region.shape.as_ref().unwrap();
            assert_eq!(shape.eccentricity, 1.0);
            assert_eq!(region.medial_axis.len(), 1);
        }
    }
}
