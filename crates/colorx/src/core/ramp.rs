use crate::Float;

/// The default number of steps for shades and tints.
pub const DEFAULT_COUNT: usize = 10;

/// The resolution of the fixed-point grid for lightness.
///
/// Ramps step across lightness in integer units of this grid, so that the
/// same color and count always produce the same sequence, no matter how the
/// platform accumulates floating point error.
pub const LIGHTNESS_GRID: i64 = 10_000_000;

/// Quantize the lightness to the fixed-point grid.
#[inline]
pub(crate) fn to_grid(lightness: Float) -> i64 {
    let lightness = if lightness.is_nan() {
        0.0
    } else {
        lightness.clamp(0.0, 1.0)
    };
    (lightness * LIGHTNESS_GRID as Float).round() as i64
}

/// Convert the grid point back to lightness.
#[inline]
pub(crate) fn from_grid(point: i64) -> Float {
    point as Float / LIGHTNESS_GRID as Float
}

/// Determine the step between grid points.
///
/// Integer division truncates toward zero, so the step never overshoots the
/// end. For counts exceeding the distance, the step is zero.
#[inline]
pub(crate) fn to_step(start: i64, end: i64, count: usize) -> i64 {
    let count = i64::try_from(count).unwrap_or(i64::MAX).max(1);
    (end - start) / count
}

/// Determine the grid point with the given index.
///
/// Indices before `count` advance from the start by whole steps. The index
/// `count` and all later indices map to the end, which thereby absorbs the
/// remainder of the integer division.
#[inline]
pub(crate) fn grid_point(start: i64, end: i64, step: i64, count: usize, index: usize) -> i64 {
    if index >= count {
        end
    } else {
        // A non-zero step implies that count and hence index are below the
        // grid resolution, so the product cannot overflow.
        start + index as i64 * step
    }
}
