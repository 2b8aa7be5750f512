//! Two-pass connected component labeling
//!
//! Partitions the foreground pixels of a binary grid into 4-connected
//! regions. A single raster scan assigns provisional labels by looking at
//! the two causal neighbors (North and West, the only neighbors already
//! visited in raster order), recording label equivalences as it goes; a
//! collapse pass then rewrites every pixel to its group's canonical label,
//! and a renumber pass packs the surviving labels into a sequential range
//! starting at [`FIRST_LABEL`].
//!
//! Diagonal adjacency is not connectivity: two foreground pixels touching
//! only at a corner end up in different regions unless a 4-connected path
//! joins them.

use crate::equiv::EquivalenceResolver;
use crate::error::{RegionError, RegionResult};
use blobscan_core::{FIRST_LABEL, Grid, UNLABELED};
use std::collections::HashMap;

/// Label the connected components of a binary grid in place.
///
/// On return the grid is a label grid: 0 stays background and every
/// foreground pixel carries a final region label in
/// `FIRST_LABEL..FIRST_LABEL + count`. Returns the region count.
///
/// Cannot fail on a well-formed binary grid; [`Grid::from_binary`] rejects
/// malformed input before this runs.
///
/// # Examples
///
/// ```
/// use blobscan_core::Grid;
/// use blobscan_region::label_components;
///
/// let mut grid = Grid::from_binary(4, 3, vec![
///     1, 1, 0, 1,
///     0, 0, 0, 1,
///     1, 0, 0, 0,
/// ]).unwrap();
/// let count = label_components(&mut grid).unwrap();
/// assert_eq!(count, 3);
/// ```
pub fn label_components(grid: &mut Grid) -> RegionResult<u32> {
    let mut resolver = EquivalenceResolver::new();
    scan(grid, &mut resolver)?;
    collapse(grid, &resolver)?;
    renumber(grid, &resolver)
}

/// Raster scan: assign a provisional label to every foreground pixel from
/// its North/West neighbors, or allocate a fresh one.
fn scan(grid: &mut Grid, resolver: &mut EquivalenceResolver) -> RegionResult<()> {
    for i in 0..grid.len() {
        if grid.data()[i] != UNLABELED {
            continue;
        }

        // Causal neighbors; out of bounds counts as background.
        let north = labeled_value(grid, grid.north(i));
        let west = labeled_value(grid, grid.west(i));

        let label = match (north, west) {
            (Some(n), None) => n,
            (None, Some(w)) => w,
            (Some(n), Some(w)) if n == w => n,
            (Some(n), Some(w)) => {
                // Two provisional labels meet here; keep North's and record
                // the equivalence for the collapse pass.
                resolver.union(w, n)?;
                n
            }
            (None, None) => resolver.new_label(),
        };
        grid.data_mut()[i] = label;
    }
    Ok(())
}

/// The neighbor's label if it exists and carries one.
#[inline]
fn labeled_value(grid: &Grid, neighbor: Option<usize>) -> Option<u32> {
    neighbor
        .map(|n| grid.data()[n])
        .filter(|&v| v >= FIRST_LABEL)
}

/// Collapse: rewrite every provisional label to its group's canonical label.
fn collapse(grid: &mut Grid, resolver: &EquivalenceResolver) -> RegionResult<()> {
    // Canonical lookups are linear in the group count, so cache them per
    // distinct provisional label.
    let mut cache: HashMap<u32, u32> = HashMap::new();
    for i in 0..grid.len() {
        let v = grid.data()[i];
        if v < FIRST_LABEL {
            continue;
        }
        let canonical = match cache.get(&v) {
            Some(&c) => c,
            None => {
                let c = resolver.canonical(v)?;
                cache.insert(v, c);
                c
            }
        };
        grid.data_mut()[i] = canonical;
    }
    Ok(())
}

/// Renumber: map each group's canonical label to a sequential final ID in
/// first-occurrence group order, and rewrite the grid in one pass.
fn renumber(grid: &mut Grid, resolver: &EquivalenceResolver) -> RegionResult<u32> {
    let count = resolver.group_count();
    let mut final_ids: HashMap<u32, u32> = HashMap::with_capacity(count);
    for index in 0..count {
        let representative = resolver.group_representative(index)?;
        final_ids.insert(representative, FIRST_LABEL + index as u32);
    }

    for i in 0..grid.len() {
        let v = grid.data()[i];
        if v < FIRST_LABEL {
            continue;
        }
        // Every labeled pixel holds a canonical label after collapse.
        let id = *final_ids.get(&v).ok_or(RegionError::UnknownLabel(v))?;
        grid.data_mut()[i] = id;
    }
    Ok(count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(width: u32, height: u32, values: &[u32]) -> Grid {
        Grid::from_binary(width, height, values.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_grid_has_no_components() {
        let mut grid = Grid::new(8, 8).unwrap();
        assert_eq!(label_components(&mut grid).unwrap(), 0);
    }

    #[test]
    fn test_single_run_is_one_component() {
        let mut grid = grid_from(5, 1, &[1, 1, 1, 1, 1]);
        assert_eq!(label_components(&mut grid).unwrap(), 1);
        assert!(grid.data().iter().all(|&v| v == FIRST_LABEL));
    }

    #[test]
    fn test_labels_are_sequential_from_two() {
        #[rustfmt::skip]
        let mut grid = grid_from(5, 3, &[
            1, 0, 1, 0, 1,
            0, 0, 0, 0, 0,
            1, 0, 0, 0, 1,
        ]);
        let count = label_components(&mut grid).unwrap();
        assert_eq!(count, 5);

        let mut labels: Vec<u32> = grid
            .data()
            .iter()
            .copied()
            .filter(|&v| v != 0)
            .collect();
        labels.sort_unstable();
        assert_eq!(labels, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_u_shape_merges_into_one() {
        // The two arms get distinct provisional labels; the bottom bend
        // records the equivalence.
        #[rustfmt::skip]
        let mut grid = grid_from(3, 3, &[
            1, 0, 1,
            1, 0, 1,
            1, 1, 1,
        ]);
        assert_eq!(label_components(&mut grid).unwrap(), 1);
        let labels: Vec<u32> = grid.data().iter().copied().filter(|&v| v != 0).collect();
        assert!(labels.iter().all(|&v| v == FIRST_LABEL));
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        #[rustfmt::skip]
        let mut grid = grid_from(2, 2, &[
            1, 0,
            0, 1,
        ]);
        assert_eq!(label_components(&mut grid).unwrap(), 2);
    }

    #[test]
    fn test_row_boundary_does_not_connect() {
        // Last pixel of row 0 and first pixel of row 1 are adjacent in the
        // flat array but not in the image.
        #[rustfmt::skip]
        let mut grid = grid_from(3, 2, &[
            0, 0, 1,
            1, 0, 0,
        ]);
        assert_eq!(label_components(&mut grid).unwrap(), 2);
    }

    #[test]
    fn test_spiral_collapses_to_one() {
        // Multiple provisional labels chain together through several merges.
        #[rustfmt::skip]
        let mut grid = grid_from(5, 5, &[
            1, 1, 1, 1, 1,
            0, 0, 0, 0, 1,
            1, 1, 1, 0, 1,
            1, 0, 0, 0, 1,
            1, 1, 1, 1, 1,
        ]);
        assert_eq!(label_components(&mut grid).unwrap(), 1);
    }

    #[test]
    fn test_background_is_untouched() {
        #[rustfmt::skip]
        let mut grid = grid_from(3, 3, &[
            0, 1, 0,
            1, 1, 1,
            0, 1, 0,
        ]);
        label_components(&mut grid).unwrap();
        for y in [0u32, 2] {
            for x in [0u32, 2] {
                assert_eq!(grid.get(grid.index(x, y)), Some(0));
            }
        }
    }
}
