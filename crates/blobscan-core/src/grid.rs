//! Grid - flat row-major pixel container
//!
//! A [`Grid`] maps a linear pixel index `i` (row-major, `i = y * width + x`)
//! to a `u32` value. The same type serves two roles:
//!
//! - **binary grid**: values in {0, 1} (background / foreground)
//! - **label grid**: 0 = background, 1 = foreground not yet labeled,
//!   >= 2 = a provisional or final region label
//!
//! Width and height are immutable for the grid's lifetime. Labeling rewrites
//! the binary values in place, so one allocation carries an image from
//! binarized input through final region labels.

use crate::error::{Error, Result};

/// Background pixel value.
pub const BACKGROUND: u32 = 0;

/// Foreground pixel that has not yet received a provisional label.
pub const UNLABELED: u32 = 1;

/// First value usable as a region label; 0 and 1 are reserved.
pub const FIRST_LABEL: u32 = 2;

/// A 2D pixel field stored as a flat row-major array.
///
/// # Examples
///
/// ```
/// use blobscan_core::Grid;
///
/// let grid = Grid::from_binary(3, 2, vec![0, 1, 1, 0, 0, 1]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.get(1), Some(1));
/// assert_eq!(grid.index(2, 1), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Grid {
    /// Create a new all-background grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![BACKGROUND; width as usize * height as usize];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a grid from binarized pixel values.
    ///
    /// This is the input contract of the analysis core: an external
    /// binarization step supplies `width * height` values, each 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension,
    /// [`Error::BadLength`] if `values.len() != width * height`, and
    /// [`Error::NotBinary`] if any value exceeds 1. All checks run before
    /// any processing touches the data.
    pub fn from_binary(width: u32, height: u32, values: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(Error::BadLength {
                expected,
                actual: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|&(_, &v)| v > UNLABELED) {
            return Err(Error::NotBinary { index, value });
        }
        Ok(Self {
            width,
            height,
            data: values,
        })
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the grid has zero pixels. Always false for a
    /// successfully constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at a linear pixel index, or `None` out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.data.get(index).copied()
    }

    /// Set the value at a linear pixel index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u32) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable raw access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Convert (x, y) coordinates to a linear pixel index.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// X coordinate (column) of a linear pixel index.
    #[inline]
    pub fn x_of(&self, index: usize) -> u32 {
        (index % self.width as usize) as u32
    }

    /// Y coordinate (row) of a linear pixel index.
    #[inline]
    pub fn y_of(&self, index: usize) -> u32 {
        (index / self.width as usize) as u32
    }

    /// Index of the pixel one row up, or `None` on the top row.
    #[inline]
    pub fn north(&self, index: usize) -> Option<usize> {
        index.checked_sub(self.width as usize)
    }

    /// Index of the pixel one row down, or `None` on the bottom row.
    #[inline]
    pub fn south(&self, index: usize) -> Option<usize> {
        let below = index + self.width as usize;
        (below < self.data.len()).then_some(below)
    }

    /// Index of the pixel one column left, or `None` in the first column.
    ///
    /// `index - 1` is in bounds for any pixel past the first, but at x = 0 it
    /// lands on the last pixel of the previous row; this helper treats the
    /// row boundary as an edge instead of wrapping.
    #[inline]
    pub fn west(&self, index: usize) -> Option<usize> {
        (index % self.width as usize != 0).then(|| index - 1)
    }

    /// Index of the pixel one column right, or `None` in the last column.
    #[inline]
    pub fn east(&self, index: usize) -> Option<usize> {
        let w = self.width as usize;
        (index % w != w - 1).then(|| index + 1)
    }

    /// The 4-connected neighbor indices of a pixel, in N, S, W, E order.
    /// Out-of-bounds neighbors are `None`.
    #[inline]
    pub fn neighbors4(&self, index: usize) -> [Option<usize>; 4] {
        [
            self.north(index),
            self.south(index),
            self.west(index),
            self.east(index),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_dimension() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_from_binary_length_check() {
        let result = Grid::from_binary(3, 3, vec![0; 8]);
        assert!(matches!(
            result,
            Err(Error::BadLength {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_from_binary_value_check() {
        let result = Grid::from_binary(2, 2, vec![0, 1, 2, 0]);
        assert!(matches!(
            result,
            Err(Error::NotBinary { index: 2, value: 2 })
        ));
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = Grid::new(7, 5).unwrap();
        let i = grid.index(4, 3);
        assert_eq!(i, 25);
        assert_eq!(grid.x_of(i), 4);
        assert_eq!(grid.y_of(i), 3);
    }

    #[test]
    fn test_neighbors_interior() {
        let grid = Grid::new(5, 5).unwrap();
        let i = grid.index(2, 2);
        assert_eq!(grid.north(i), Some(grid.index(2, 1)));
        assert_eq!(grid.south(i), Some(grid.index(2, 3)));
        assert_eq!(grid.west(i), Some(grid.index(1, 2)));
        assert_eq!(grid.east(i), Some(grid.index(3, 2)));
    }

    #[test]
    fn test_neighbors_no_row_wraparound() {
        let grid = Grid::new(5, 5).unwrap();

        // First column: west must not wrap to the previous row's last pixel
        let i = grid.index(0, 2);
        assert_eq!(grid.west(i), None);

        // Last column: east must not wrap to the next row's first pixel
        let i = grid.index(4, 2);
        assert_eq!(grid.east(i), None);
    }

    #[test]
    fn test_neighbors_edges() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.north(grid.index(2, 0)), None);
        assert_eq!(grid.south(grid.index(2, 2)), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.set(4, 1).is_err());
        assert!(grid.set(3, 1).is_ok());
        assert_eq!(grid.get(3), Some(1));
    }
}
