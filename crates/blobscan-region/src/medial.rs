//! Approximate distance transform and medial axis
//!
//! Computes a per-region distance field by iterative "onion peeling": every
//! region pixel starts at 1, and a pixel rises to distance `d` once all four
//! of its neighbors hold `d` or `d - 1`. This is an approximate transform,
//! not exact Euclidean or chessboard distance; it is kept deliberately
//! simple and bounded. The medial axis is the ridge of local maxima of that
//! field, and [`deskeletonize`] grows an approximate region back out of the
//! ridge alone.
//!
//! The scratch buffer is scoped to the region's tight bounding box, not the
//! full image, so per-region work does not allocate or share a full-image
//! buffer. Neighbors fall into three cases: inside the window (their stored
//! distance applies), inside the image but outside the window (ambient
//! background, distance 0), and outside the image entirely (treated as
//! automatically satisfying during growth, so regions hugging the image
//! border keep growing inward).

use crate::component::Region;
use crate::error::{RegionError, RegionResult};
use blobscan_core::{Grid, Rect};
use std::collections::BTreeMap;

const OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A region-scoped distance field.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    /// Tight bounding box of the region, in image coordinates
    window: Rect,
    image_width: i32,
    image_height: i32,
    /// Window-local distance values, row-major; 0 = not in the region
    values: Vec<u32>,
}

impl DistanceMap {
    /// Compute the distance transform for a region's pixel set.
    ///
    /// Iterates distance levels `d = 2..=min(window_w, window_h)`, raising a
    /// pixel to `d` when each of its 4 neighbors holds `d` or `d - 1`, and
    /// stops early at the first level that changes nothing. The fixed-point
    /// check, not the level bound, is the authoritative terminator; the
    /// bound merely caps the work for pathological inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyRegion`] for an empty pixel set.
    pub fn compute(grid: &Grid, pixels: &[usize]) -> RegionResult<DistanceMap> {
        if pixels.is_empty() {
            return Err(RegionError::EmptyRegion);
        }

        let mut min_x = u32::MAX;
        let mut max_x = 0;
        let mut min_y = u32::MAX;
        let mut max_y = 0;
        for &i in pixels {
            let x = grid.x_of(i);
            let y = grid.y_of(i);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let window = Rect::new_unchecked(
            min_x as i32,
            min_y as i32,
            (max_x - min_x + 1) as i32,
            (max_y - min_y + 1) as i32,
        );

        let mut map = DistanceMap {
            window,
            image_width: grid.width() as i32,
            image_height: grid.height() as i32,
            values: vec![0; (window.w * window.h) as usize],
        };
        for &i in pixels {
            let local = map.local_index(grid.x_of(i) as i32, grid.y_of(i) as i32);
            map.values[local] = 1;
        }

        let bound = window.w.min(window.h) as u32;
        for d in 2..=bound {
            let mut raised_any = false;
            loop {
                let mut changed = false;
                for ly in 0..window.h {
                    for lx in 0..window.w {
                        let local = (ly * window.w + lx) as usize;
                        if map.values[local] != d - 1 {
                            continue;
                        }
                        if map.neighbors_reach(window.x + lx, window.y + ly, d) {
                            map.values[local] = d;
                            changed = true;
                        }
                    }
                }
                if !changed {
                    break;
                }
                raised_any = true;
            }
            // Nothing reached level d, so nothing can reach d + 1 either.
            if !raised_any {
                break;
            }
        }

        Ok(map)
    }

    /// The tight bounding box this map covers.
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Distance value at a global pixel index; 0 outside the window.
    pub fn distance(&self, index: usize) -> u32 {
        let gx = (index % self.image_width as usize) as i32;
        let gy = (index / self.image_width as usize) as i32;
        if self.window.contains_point(gx, gy) {
            self.values[self.local_index(gx, gy)]
        } else {
            0
        }
    }

    /// The largest distance value in the field.
    pub fn max_distance(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Extract the medial axis: every region pixel whose distance is >= all
    /// four of its neighbors' distances, with background and out-of-image
    /// neighbors contributing the ambient distance 0.
    ///
    /// Returned as a map from global pixel index to distance value, in
    /// ascending index order.
    pub fn medial_axis(&self, pixels: &[usize]) -> BTreeMap<usize, u32> {
        let mut axis = BTreeMap::new();
        for &i in pixels {
            let gx = (i % self.image_width as usize) as i32;
            let gy = (i / self.image_width as usize) as i32;
            let v = self.values[self.local_index(gx, gy)];

            let is_ridge = OFFSETS.iter().all(|&(dx, dy)| {
                let neighbor = self.cell(gx + dx, gy + dy).unwrap_or(0);
                v >= neighbor
            });
            if is_ridge {
                axis.insert(i, v);
            }
        }
        axis
    }

    #[inline]
    fn local_index(&self, gx: i32, gy: i32) -> usize {
        ((gy - self.window.y) * self.window.w + (gx - self.window.x)) as usize
    }

    /// Value of the cell at global coordinates: `None` outside the image,
    /// ambient 0 inside the image but outside the window.
    #[inline]
    fn cell(&self, gx: i32, gy: i32) -> Option<u32> {
        if gx < 0 || gy < 0 || gx >= self.image_width || gy >= self.image_height {
            return None;
        }
        if self.window.contains_point(gx, gy) {
            Some(self.values[self.local_index(gx, gy)])
        } else {
            Some(0)
        }
    }

    /// Whether all four neighbors of (gx, gy) hold `d` or `d - 1`.
    /// Out-of-image neighbors satisfy automatically.
    fn neighbors_reach(&self, gx: i32, gy: i32, d: u32) -> bool {
        OFFSETS.iter().all(|&(dx, dy)| match self.cell(gx + dx, gy + dy) {
            Some(v) => v == d || v == d - 1,
            None => true,
        })
    }
}

/// Replace a region's pixel set with its medial axis.
///
/// Destructive: the original pixel set is discarded. Callers that need both
/// must clone the region first. The medial-axis map is stored on the region
/// so [`deskeletonize`] can rebuild from it later.
pub fn skeletonize(region: &mut Region, dist: &DistanceMap) {
    region.medial_axis = dist.medial_axis(&region.pixels);
    region.pixels = region.medial_axis.keys().copied().collect();
}

/// Rebuild an approximate region from its medial-axis map alone.
///
/// Iterates stored distance values from the maximum down to 2; each pixel at
/// value `v` assigns `v - 1` to any 4-neighbor not yet assigned and adds it
/// to the pixel set. The reconstruction is lossy: it restores a region of
/// the same approximate extent and distance profile, not a bit-exact copy of
/// the original pixels, and it may claim pixels the original never held.
pub fn deskeletonize(region: &mut Region, grid: &Grid) {
    let mut cells: BTreeMap<usize, u32> = region.medial_axis.clone();
    let max = cells.values().copied().max().unwrap_or(0);

    for v in (2..=max).rev() {
        let frontier: Vec<usize> = cells
            .iter()
            .filter_map(|(&i, &value)| (value == v).then_some(i))
            .collect();
        for i in frontier {
            for n in grid.neighbors4(i).into_iter().flatten() {
                cells.entry(n).or_insert(v - 1);
            }
        }
    }

    region.pixels = cells.into_keys().collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::extract_components;
    use crate::label::label_components;

    fn single_region(width: u32, height: u32, values: &[u32]) -> (Grid, Region) {
        let mut grid = Grid::from_binary(width, height, values.to_vec()).unwrap();
        let count = label_components(&mut grid).unwrap();
        assert_eq!(count, 1);
        let mut regions = extract_components(&grid, count).unwrap();
        (grid, regions.remove(0))
    }

    fn square_5x5_in_7x7() -> (Grid, Region) {
        let mut values = vec![0u32; 49];
        for y in 1..6 {
            for x in 1..6 {
                values[y * 7 + x] = 1;
            }
        }
        single_region(7, 7, &values)
    }

    #[test]
    fn test_distance_empty_region_fails() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            DistanceMap::compute(&grid, &[]),
            Err(RegionError::EmptyRegion)
        ));
    }

    #[test]
    fn test_distance_onion_layers() {
        // 5x5 square: ring at 1, inner ring at 2, center at 3
        let (grid, region) = square_5x5_in_7x7();
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();

        assert_eq!(dist.max_distance(), 3);
        assert_eq!(dist.distance(grid.index(3, 3)), 3);
        assert_eq!(dist.distance(grid.index(2, 2)), 2);
        assert_eq!(dist.distance(grid.index(3, 2)), 2);
        assert_eq!(dist.distance(grid.index(1, 1)), 1);
        assert_eq!(dist.distance(grid.index(3, 1)), 1);

        // Outside the window, distance reads 0
        assert_eq!(dist.distance(grid.index(0, 0)), 0);
    }

    #[test]
    fn test_distance_single_row_stays_one() {
        let (grid, region) = single_region(5, 1, &[1, 1, 1, 1, 1]);
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();
        assert_eq!(dist.max_distance(), 1);
    }

    #[test]
    fn test_distance_window_is_tight() {
        let (grid, region) = square_5x5_in_7x7();
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();
        assert_eq!(dist.window(), Rect::new_unchecked(1, 1, 5, 5));
    }

    #[test]
    fn test_medial_axis_of_square() {
        // Ridge of the 5x5 square field: the center, the four inner-ring
        // corners, and the four outer corners
        let (grid, region) = square_5x5_in_7x7();
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();
        let axis = dist.medial_axis(&region.pixels);

        assert_eq!(axis.len(), 9);
        assert_eq!(axis.get(&grid.index(3, 3)), Some(&3));
        assert_eq!(axis.get(&grid.index(2, 2)), Some(&2));
        assert_eq!(axis.get(&grid.index(4, 4)), Some(&2));
        assert_eq!(axis.get(&grid.index(1, 1)), Some(&1));
        assert_eq!(axis.get(&grid.index(5, 5)), Some(&1));

        // Edge midpoints sit next to a higher ridge and are excluded
        assert!(!axis.contains_key(&grid.index(3, 1)));
        assert!(!axis.contains_key(&grid.index(3, 2)));
    }

    #[test]
    fn test_skeletonize_replaces_pixels() {
        let (grid, mut region) = square_5x5_in_7x7();
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();

        skeletonize(&mut region, &dist);
        assert_eq!(region.pixel_count(), 9);
        assert_eq!(region.medial_axis.len(), 9);
        assert!(region.pixels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deskeletonize_round_trip() {
        let (grid, mut region) = square_5x5_in_7x7();
        let original: Vec<usize> = region.pixels.clone();
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();

        skeletonize(&mut region, &dist);
        deskeletonize(&mut region, &grid);

        // Reconstruction is approximate in general; for this symmetric
        // square it recovers the full 25-pixel extent
        assert_eq!(region.pixels, original);
    }

    #[test]
    fn test_deskeletonize_flat_skeleton() {
        // All distances 1: nothing to grow, pixels are the skeleton itself
        let (grid, mut region) = single_region(4, 1, &[1, 1, 1, 1]);
        let dist = DistanceMap::compute(&grid, &region.pixels).unwrap();
        skeletonize(&mut region, &dist);
        let skeleton = region.pixels.clone();
        deskeletonize(&mut region, &grid);
        assert_eq!(region.pixels, skeleton);
    }
}
