use crate::Float;

/// The hue offset of the complementary color.
pub(crate) const COMPLEMENTARY: Float = 180.0;

/// The hue offsets of the two triadic colors.
pub(crate) const TRIADIC: [Float; 2] = [120.0, 240.0];

/// The hue offsets of the three tetradic colors.
pub(crate) const TETRADIC: [Float; 3] = [90.0, 180.0, 270.0];

/// The hue offsets of the two analogous colors.
pub(crate) const ANALOGOUS: [Float; 2] = [30.0, 330.0];

/// Rotate the hue of the given HSL or HSV coordinates by the given number of
/// degrees.
///
/// The resulting hue always falls into `0..360`, even for negative offsets.
#[inline]
pub(crate) fn rotate_hue(coordinates: &[Float; 3], degrees: Float) -> [Float; 3] {
    let [h, s, l] = *coordinates;
    let mut hue = (h + degrees).rem_euclid(360.0);
    // rem_euclid() may round up to the modulus for tiny negative sums.
    if hue >= 360.0 {
        hue = 0.0;
    }
    [hue, s, l]
}

/// Shift the lightness of the given HSL coordinates by the given amount,
/// clamping the result to unit range.
#[inline]
pub(crate) fn shift_lightness(coordinates: &[Float; 3], amount: Float) -> [Float; 3] {
    let [h, s, l] = *coordinates;
    [h, s, (l + amount).clamp(0.0, 1.0)]
}
