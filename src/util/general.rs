//! General-purpose utility functions.

/// Maps a value from the provided input range to the provided output range.
#[inline]
pub fn map(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> f64 {
    scale(normalize(value, in_min, in_max), out_min, out_max)
}

/// Scales a value to a provided range, assuming it is normalised.
///
/// Like `map()`, but with no input range.
#[inline]
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    value.mul_add(max - min, min)
}

/// Normalizes a value from a provided range.
///
/// Like `map()`, but with the output range set to `0.0 - 1.0`.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Returns whether `value` and `target` are equal, with a tolerance of
/// [`f64::EPSILON`].
pub fn eps_eq(value: f64, target: f64) -> bool {
    (target - value).abs() < f64::EPSILON
}

/// Returns whether the absolute value of `value` is less than the provided
/// `tolerance` value. Useful for checking approximate equality.
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}

/// Returns `count` values evenly spaced over the half-open range
/// `start..end`, i.e. `end` itself is never produced.
pub fn linspace_exclusive(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let step = (end - start) / count as f64;

    (0..count).map(|i| (i as f64).mul_add(step, start)).collect()
}

/// Returns the positions of grid lines spaced by `spacing` within
/// `-limit..=limit`, always including `0.0`.
///
/// # Panics
///
/// Panics in debug mode if `spacing` is not positive.
pub fn grid_ticks(limit: f64, spacing: f64) -> Vec<f64> {
    debug_assert!(spacing > 0.0);

    let steps = (limit / spacing + 1e-9).floor() as i64;

    (-steps..=steps).map(|i| i as f64 * spacing).collect()
}
