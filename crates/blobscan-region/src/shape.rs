//! Shape descriptors for a single region
//!
//! Computes the geometric descriptors of one region against the finalized
//! label grid: perimeter membership, centroid, bounding box, second-order
//! moments, the axis of elongation derived from them, eccentricity, and
//! compactness. Later steps depend on earlier ones (moments need the
//! centroid, compactness needs the perimeter count), so
//! [`describe`] runs them in dependency order.
//!
//! The perimeter is a pixel-membership predicate, not an ordered contour
//! walk: a region pixel belongs to the perimeter when any of its four axis
//! neighbors is outside the image or background.

use crate::component::Region;
use crate::error::{RegionError, RegionResult};
use blobscan_core::{BACKGROUND, Grid, Rect};

/// Scalar shape descriptors of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStats {
    /// Centroid x coordinate (mean of pixel columns)
    pub centroid_x: f64,
    /// Centroid y coordinate (mean of pixel rows)
    pub centroid_y: f64,
    /// Bounding box, with a one-pixel outward margin on the left and top so
    /// a drawn box does not touch the region's own pixels
    pub bounds: Rect,
    /// Second-order moment a = Σx'²
    pub moment_a: f64,
    /// Second-order moment b = 2Σx'y'
    pub moment_b: f64,
    /// Second-order moment c = Σy'²
    pub moment_c: f64,
    /// Sine of twice the elongation-axis angle
    pub sin_two_theta: f64,
    /// Cosine of twice the elongation-axis angle
    pub cos_two_theta: f64,
    /// Principal moment about the axis of maximum spread
    pub chi_max: f64,
    /// Principal moment about the axis of minimum spread
    pub chi_min: f64,
    /// chi_max / chi_min; 1 for perfectly symmetric regions by convention
    pub eccentricity: f64,
    /// Number of perimeter pixels used for compactness
    pub perimeter_count: usize,
    /// perimeter_count² / pixel_count
    pub compactness: f64,
}

impl ShapeStats {
    /// Measure all scalar descriptors for a region's pixel set.
    ///
    /// `perimeter_count` comes from [`perimeter_pixels`]; it is passed in so
    /// callers that keep the perimeter subset do not compute it twice.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyRegion`] for an empty pixel set. The
    /// extractor and filter never produce one, so hitting this indicates a
    /// pipeline bug.
    pub fn measure(
        grid: &Grid,
        pixels: &[usize],
        perimeter_count: usize,
    ) -> RegionResult<ShapeStats> {
        let (centroid_x, centroid_y) = centroid(grid, pixels)?;
        let bounds = bounding_box(grid, pixels)?;
        let (moment_a, moment_b, moment_c) = second_moments(grid, pixels, centroid_x, centroid_y);
        let axis = elongation_axis(moment_a, moment_b, moment_c);
        let compactness = compactness(perimeter_count, pixels.len());

        Ok(ShapeStats {
            centroid_x,
            centroid_y,
            bounds,
            moment_a,
            moment_b,
            moment_c,
            sin_two_theta: axis.sin_two_theta,
            cos_two_theta: axis.cos_two_theta,
            chi_max: axis.chi_max,
            chi_min: axis.chi_min,
            eccentricity: axis.eccentricity,
            perimeter_count,
            compactness,
        })
    }
}

/// Axis-of-elongation quantities derived from the second-order moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationAxis {
    pub sin_two_theta: f64,
    pub cos_two_theta: f64,
    pub chi_max: f64,
    pub chi_min: f64,
    pub eccentricity: f64,
}

/// Compute a region's perimeter subset.
///
/// A pixel is on the perimeter when it has fewer than four in-bounds
/// foreground neighbors, i.e. when any axis neighbor is outside the image or
/// background. Adjacent pixels of a different region cannot occur under
/// 4-connectivity, so a background test suffices.
pub fn perimeter_pixels(grid: &Grid, pixels: &[usize]) -> Vec<usize> {
    pixels
        .iter()
        .copied()
        .filter(|&i| {
            grid.neighbors4(i)
                .iter()
                .any(|n| match n {
                    Some(j) => grid.data()[*j] == BACKGROUND,
                    None => true,
                })
        })
        .collect()
}

/// Arithmetic mean of the region's pixel coordinates.
///
/// # Errors
///
/// Returns [`RegionError::EmptyRegion`] for an empty pixel set.
pub fn centroid(grid: &Grid, pixels: &[usize]) -> RegionResult<(f64, f64)> {
    if pixels.is_empty() {
        return Err(RegionError::EmptyRegion);
    }
    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    for &i in pixels {
        sum_x += u64::from(grid.x_of(i));
        sum_y += u64::from(grid.y_of(i));
    }
    let n = pixels.len() as f64;
    Ok((sum_x as f64 / n, sum_y as f64 / n))
}

/// Bounding box with the one-pixel outward margin on the left and top edges.
///
/// `left = min(x) - 1`, `top = min(y) - 1`, `right = max(x)`,
/// `bottom = max(y)`; width and height are the corresponding differences.
/// The margin keeps a drawn box from touching the region's own pixels and is
/// part of the output contract, so it is reproduced exactly even though it
/// can push `left`/`top` to -1 for regions on the image border.
///
/// # Errors
///
/// Returns [`RegionError::EmptyRegion`] for an empty pixel set.
pub fn bounding_box(grid: &Grid, pixels: &[usize]) -> RegionResult<Rect> {
    if pixels.is_empty() {
        return Err(RegionError::EmptyRegion);
    }
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    for &i in pixels {
        let x = grid.x_of(i) as i32;
        let y = grid.y_of(i) as i32;
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let left = min_x - 1;
    let top = min_y - 1;
    Ok(Rect::new_unchecked(left, top, max_x - left, max_y - top))
}

/// Second-order moments about the centroid: `a = Σx'²`, `b = 2Σx'y'`,
/// `c = Σy'²`.
pub fn second_moments(grid: &Grid, pixels: &[usize], centroid_x: f64, centroid_y: f64) -> (f64, f64, f64) {
    let mut a = 0.0;
    let mut b = 0.0;
    let mut c = 0.0;
    for &i in pixels {
        let dx = grid.x_of(i) as f64 - centroid_x;
        let dy = grid.y_of(i) as f64 - centroid_y;
        a += dx * dx;
        b += dx * dy;
        c += dy * dy;
    }
    (a, 2.0 * b, c)
}

/// Derive the elongation axis and principal moments from a, b, c.
///
/// For a perfectly symmetric region (`a == c` and `b == 0` - a single pixel,
/// a perfect square) the denominator `√(b² + (a-c)²)` vanishes; that case is
/// defined as `sin2θ = cos2θ = 0` with eccentricity 1, avoiding a division
/// by zero.
pub fn elongation_axis(a: f64, b: f64, c: f64) -> ElongationAxis {
    let denom = (b * b + (a - c) * (a - c)).sqrt();
    if denom == 0.0 {
        return ElongationAxis {
            sin_two_theta: 0.0,
            cos_two_theta: 0.0,
            chi_max: 0.5 * (a + c),
            chi_min: 0.5 * (a + c),
            eccentricity: 1.0,
        };
    }

    let sin_two_theta = b / denom;
    let cos_two_theta = (a - c) / denom;
    let spread = 0.5 * (a - c) * cos_two_theta + 0.5 * b * sin_two_theta;
    let chi_max = 0.5 * (a + c) + spread;
    let chi_min = 0.5 * (a + c) - spread;

    ElongationAxis {
        sin_two_theta,
        cos_two_theta,
        chi_max,
        chi_min,
        // Infinite for degenerate one-dimensional regions (chi_min == 0)
        eccentricity: chi_max / chi_min,
    }
}

/// Compactness: `perimeter_count² / pixel_count`.
pub fn compactness(perimeter_count: usize, pixel_count: usize) -> f64 {
    (perimeter_count * perimeter_count) as f64 / pixel_count as f64
}

/// Fill in a region's perimeter subset and shape statistics.
///
/// # Errors
///
/// Returns [`RegionError::EmptyRegion`] if the region has no pixels.
pub fn describe(grid: &Grid, region: &mut Region) -> RegionResult<()> {
    region.perimeter = perimeter_pixels(grid, &region.pixels);
    region.shape = Some(ShapeStats::measure(
        grid,
        &region.pixels,
        region.perimeter.len(),
    )?);
    Ok(())
}
