//! Flood-fill component collection
//!
//! A one-pass alternative to two-pass labeling: raster-scan for an unvisited
//! foreground pixel, then flood out over its 4-connected neighbors to
//! collect the whole component before resuming the scan. Uses an explicit
//! queue rather than recursion, so large regions cannot overflow the stack.
//!
//! Produces the same partition as [`label_components`]
//! (crate::label::label_components) without mutating the grid; useful when
//! the caller only needs pixel sets and wants to keep the binary grid
//! intact.

use blobscan_core::{BACKGROUND, Grid};
use std::collections::VecDeque;

/// Collect the 4-connected foreground components of a grid.
///
/// Components are returned in order of their first raster-scan encounter;
/// each component's pixel indices are sorted ascending. The grid is not
/// modified. Works on binary and label grids alike: any non-background
/// value counts as foreground.
///
/// # Examples
///
/// ```
/// use blobscan_core::Grid;
/// use blobscan_region::flood_components;
///
/// let grid = Grid::from_binary(4, 2, vec![
///     1, 0, 0, 1,
///     1, 0, 0, 0,
/// ]).unwrap();
/// let components = flood_components(&grid);
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[0], vec![0, 4]);
/// ```
pub fn flood_components(grid: &Grid) -> Vec<Vec<usize>> {
    let mut visited = vec![false; grid.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..grid.len() {
        if visited[start] || grid.data()[start] == BACKGROUND {
            continue;
        }

        let mut pixels = Vec::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(i) = queue.pop_front() {
            pixels.push(i);
            for n in grid.neighbors4(i).into_iter().flatten() {
                if !visited[n] && grid.data()[n] != BACKGROUND {
                    visited[n] = true;
                    queue.push_back(n);
                }
            }
        }

        pixels.sort_unstable();
        components.push(pixels);
    }

    components
}
