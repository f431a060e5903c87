use crate::{Bits, Float};

/// Precision for equality testing and hashing.
///
/// Floats are multiplied by this factor and rounded before being compared bit
/// for bit. The factor depends on the floating point representation.
pub(crate) trait FloatExt {
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that a floating point number is within the given
/// distance of the expected value.
///
/// Quantities that went through 8-bit channels are only accurate to about
/// 1/255, so [`assert_close_enough`] is too strict for them.
#[cfg(test)]
macro_rules! assert_within {
    ($actual:expr, $expected:expr, $epsilon:expr $(,)?) => {
        let (actual, expected, epsilon) = ($actual, $expected, $epsilon);
        assert!(
            (actual - expected).abs() <= epsilon,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            epsilon,
            actual,
            expected
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within;

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize a hue for equality testing and hashing.
///
/// Full rotations are removed and the result is scaled to unit range before
/// rounding, so that 365º and 5º compare equal.
#[inline]
pub(crate) fn to_eq_hue_bits(hue: Float) -> Bits {
    let hue = if hue.is_nan() { 0.0 } else { hue };
    let mut bits = to_eq_bits(hue.rem_euclid(360.0) / 360.0);

    // A hue just shy of a full rotation rounds up to one.
    if bits == to_eq_bits(1.0) {
        bits = to_eq_bits(0.0);
    }
    bits
}

/// Normalize floating point coordinates with a leading hue.
pub(crate) fn to_eq_polar<const N: usize>(coordinates: &[Float; N]) -> [Bits; N] {
    let mut bits = [0; N];
    for (index, value) in coordinates.iter().enumerate() {
        bits[index] = if index == 0 {
            to_eq_hue_bits(*value)
        } else {
            to_eq_bits(*value)
        };
    }
    bits
}

/// Normalize floating point coordinates without hue.
pub(crate) fn to_eq_coordinates<const N: usize>(coordinates: &[Float; N]) -> [Bits; N] {
    let mut bits = [0; N];
    for (index, value) in coordinates.iter().enumerate() {
        bits[index] = to_eq_bits(*value);
    }
    bits
}
