use crate::Float;

/// Convert the given 8-bit channel to a unit-range floating point number.
#[inline]
pub(crate) fn from_8bit(channel: u8) -> Float {
    channel as Float / 255.0
}

/// Convert the unit-range floating point number to an 8-bit channel.
///
/// The value is clamped to `0..=1` before scaling, so that reconstructed
/// channels slightly outside unit range still pack correctly.
#[inline]
pub(crate) fn to_8bit(value: Float) -> u8 {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    (value * 255.0).round() as u8
}

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [from_8bit(r), from_8bit(g), from_8bit(b)]
}

/// Convert the floating point coordinates to 24-bit representation, clamping
/// each coordinate to unit range.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [to_8bit(r), to_8bit(g), to_8bit(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue in degrees for the given RGB coordinates with the given
/// maximum and chroma. This helper is shared between HSL and HSV, which use
/// the same hexagonal hue.
fn rgb_to_hue(value: &[Float; 3], max: Float, chroma: Float) -> Float {
    let [r, g, b] = *value;

    if chroma == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        ((g - b) / chroma) % 6.0
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let hue = (sector * 60.0) % 360.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Reconstruct RGB coordinates from hue, chroma, and offset. The six 60º
/// segments of the hue hexagon each assign chroma, the intermediate value, and
/// zero to a different permutation of channels.
fn hue_chroma_to_rgb(hue: Float, chroma: Float, offset: Float) -> [Float; 3] {
    let hue = if hue.is_nan() { 0.0 } else { hue.rem_euclid(360.0) };
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let (c, x, m) = (chroma + offset, x + offset, offset);

    match (hue as u32) / 60 {
        0 => [c, x, m],
        1 => [x, c, m],
        2 => [m, c, x],
        3 => [m, x, c],
        4 => [x, m, c],
        _ => [c, m, x],
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for RGB to HSL. This is a one-hop, direct conversion.
///
/// The resulting hue ranges `0..360`, saturation and lightness range `0..=1`.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;

    let lightness = (max + min) / 2.0;
    let saturation = if chroma == 0.0 {
        0.0
    } else {
        chroma / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    [
        rgb_to_hue(value, max, chroma).clamp(0.0, 360.0),
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
    ]
}

/// Convert coordinates for HSL to RGB. This is a one-hop, direct conversion.
///
/// The resulting coordinates are clamped to unit range.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let [r, g, b] = hue_chroma_to_rgb(h, chroma, l - 0.5 * chroma);

    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Convert coordinates for RGB to HSV. This is a one-hop, direct conversion.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;

    let saturation = if max == 0.0 { 0.0 } else { chroma / max };

    [
        rgb_to_hue(value, max, chroma).clamp(0.0, 360.0),
        saturation.clamp(0.0, 1.0),
        max.clamp(0.0, 1.0),
    ]
}

/// Convert coordinates for HSV to RGB. This is a one-hop, direct conversion.
///
/// The resulting coordinates are clamped to unit range.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let chroma = v * s;
    let [r, g, b] = hue_chroma_to_rgb(h, chroma, v - chroma);

    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Convert coordinates for HSL to HSV. This is a one-hop, direct conversion
/// that never goes through 8-bit channels.
pub(crate) fn hsl_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let v = s.mul_add(l.min(1.0 - l), l);
    let saturation = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [h, saturation.clamp(0.0, 1.0), v.clamp(0.0, 1.0)]
}

/// Convert coordinates for HSV to HSL. This is a one-hop, direct conversion
/// that never goes through 8-bit channels.
pub(crate) fn hsv_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let l = v * (1.0 - s / 2.0);
    let saturation = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };

    [h, saturation.clamp(0.0, 1.0), l.clamp(0.0, 1.0)]
}

/// Convert coordinates for RGB to CMYK. This is a one-hop, direct conversion.
///
/// Pure black has no defined cyan, magenta, or yellow, since computing them
/// would divide by zero. They are zero instead.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let k = 1.0 - r.max(g.max(b));

    if k < 1.0 {
        let white = 1.0 - k;
        [
            (1.0 - r - k) / white,
            (1.0 - g - k) / white,
            (1.0 - b - k) / white,
            k,
        ]
    } else {
        [0.0, 0.0, 0.0, 1.0]
    }
}

/// Convert coordinates for CMYK to RGB. This is a one-hop, direct conversion.
pub(crate) fn cmyk_to_rgb(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    let white = 1.0 - k;
    [(1.0 - c) * white, (1.0 - m) * white, (1.0 - y) * white]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_within;

    const EPSILON: Float = 1e-9;

    // #e91e63
    const PINK_RGB: [u8; 3] = [0xe9, 0x1e, 0x63];
    #[allow(clippy::excessive_precision)]
    const PINK_HSL: [Float; 3] = [339.60591133004925, 0.8218623481781375, 0.5156862745098039];
    #[allow(clippy::excessive_precision)]
    const PINK_HSV: [Float; 3] = [339.60591133004925, 0.871244635193133, 0.9137254901960784];
    #[allow(clippy::excessive_precision)]
    const PINK_CMYK: [Float; 4] = [0.0, 0.871244635193133, 0.5751072961373391, 0.0862745098039216];

    fn pink() -> [Float; 3] {
        let [r, g, b] = PINK_RGB;
        from_24bit(r, g, b)
    }

    #[test]
    fn test_8bit() {
        assert_eq!(to_8bit(0.0), 0);
        assert_eq!(to_8bit(1.0), 255);
        assert_eq!(to_8bit(1.2), 255);
        assert_eq!(to_8bit(-0.3), 0);
        assert_eq!(to_8bit(Float::NAN), 0);
        assert_eq!(to_8bit(0.5), 128);
        for channel in 0..=255 {
            assert_eq!(to_8bit(from_8bit(channel)), channel);
        }
    }

    #[test]
    fn test_hsl() {
        let hsl = rgb_to_hsl(&pink());
        for index in 0..3 {
            assert_within!(hsl[index], PINK_HSL[index], EPSILON);
        }
        assert_eq!(to_24bit(&hsl_to_rgb(&hsl)), PINK_RGB);

        // Grays have neither hue nor saturation.
        assert_eq!(rgb_to_hsl(&from_24bit(128, 128, 128))[..2], [0.0, 0.0]);
        assert_eq!(to_24bit(&hsl_to_rgb(&[0.0, 0.0, 0.5])), [128, 128, 128]);

        // A full rotation is the same as none.
        assert_eq!(to_24bit(&hsl_to_rgb(&[360.0, 1.0, 0.5])), [255, 0, 0]);
        assert_eq!(to_24bit(&hsl_to_rgb(&[-240.0, 1.0, 0.5])), [0, 255, 0]);
    }

    #[test]
    fn test_hsl_segments() {
        for (hue, expected) in [
            (0.0, [255, 0, 0]),
            (60.0, [255, 255, 0]),
            (120.0, [0, 255, 0]),
            (180.0, [0, 255, 255]),
            (240.0, [0, 0, 255]),
            (300.0, [255, 0, 255]),
        ] {
            assert_eq!(to_24bit(&hsl_to_rgb(&[hue, 1.0, 0.5])), expected);
            assert_eq!(to_24bit(&hsv_to_rgb(&[hue, 1.0, 1.0])), expected);
        }
    }

    #[test]
    fn test_hsv() {
        let hsv = rgb_to_hsv(&pink());
        for index in 0..3 {
            assert_within!(hsv[index], PINK_HSV[index], EPSILON);
        }
        assert_eq!(to_24bit(&hsv_to_rgb(&hsv)), PINK_RGB);
        assert_eq!(rgb_to_hsv(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsl_hsv() {
        let hsv = hsl_to_hsv(&PINK_HSL);
        for index in 0..3 {
            assert_within!(hsv[index], PINK_HSV[index], EPSILON);
        }

        let hsl = hsv_to_hsl(&PINK_HSV);
        for index in 0..3 {
            assert_within!(hsl[index], PINK_HSL[index], EPSILON);
        }

        assert_eq!(hsl_to_hsv(&[0.0, 0.5, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(hsv_to_hsl(&[0.0, 0.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cmyk() {
        let cmyk = rgb_to_cmyk(&pink());
        for index in 0..4 {
            assert_within!(cmyk[index], PINK_CMYK[index], EPSILON);
        }
        assert_eq!(to_24bit(&cmyk_to_rgb(&cmyk)), PINK_RGB);

        assert_eq!(rgb_to_cmyk(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_cmyk(&[1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(to_24bit(&cmyk_to_rgb(&[0.0, 0.87, 0.58, 0.09])), [232, 30, 97]);
    }
}
