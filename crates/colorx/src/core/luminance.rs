use crate::Float;

/// The coefficients for computing the relative luminance of sRGB coordinates,
/// as defined by WCAG 2.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Colors with a relative luminance below this threshold are dark.
pub const DARKNESS_THRESHOLD: Float = 0.5;

/// Convert a gamma-corrected sRGB coordinate to its linear value.
///
/// The breakpoint 0.03928 stems from WCAG 2 and differs slightly from the
/// 0.04045 used by the sRGB standard. For 8-bit channels, both yield the same
/// result, since no channel falls between the two.
#[inline]
fn linearize(value: Float) -> Float {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance Y for the given sRGB coordinates.
pub(crate) fn to_luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Determine whether the given relative luminance is dark.
#[inline]
pub(crate) fn is_dark(luminance: Float) -> bool {
    luminance < DARKNESS_THRESHOLD
}

#[cfg(test)]
mod test {
    use super::{is_dark, to_luminance};
    use crate::core::{assert_within, from_24bit};
    use crate::Float;

    fn luminance(r: u8, g: u8, b: u8) -> Float {
        to_luminance(&from_24bit(r, g, b))
    }

    #[test]
    fn test_luminance() {
        assert_within!(luminance(0, 0, 0), 0.0, 1e-12);
        assert_within!(luminance(255, 255, 255), 1.0, 1e-12);
        assert_within!(luminance(0xe9, 0x1e, 0x63), 0.1915303712121659, 1e-9);
        assert_within!(luminance(0x1e, 0xe9, 0xa4), 0.6123418216551351, 1e-9);

        // Dark channels take the linear branch.
        assert_within!(luminance(10, 10, 10), 10.0 / 255.0 / 12.92, 1e-12);
    }

    #[test]
    fn test_is_dark() {
        assert!(is_dark(luminance(0xe9, 0x1e, 0x63)));
        assert!(!is_dark(luminance(0x1e, 0xe9, 0xa4)));

        // The gray threshold sits between 187 and 188.
        assert!(is_dark(luminance(187, 187, 187)));
        assert!(!is_dark(luminance(188, 188, 188)));
        assert!(!is_dark(luminance(255, 255, 255)));
        assert!(is_dark(luminance(0, 0, 0)));
    }
}
