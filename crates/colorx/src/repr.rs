//! Color representations.
//!
//! This module offers [`Rgb`], [`Argb`], [`Hex`], [`Hsl`], [`Hsla`], [`Hsv`],
//! and [`Cmyk`]. Together with [`PackedColor`], they all implement the
//! [`Color`] trait and hence share the same conversions and derivations. The
//! integer and string representations are exact projections of the packed
//! form. The floating point representations quantize to 8-bit channels when
//! converting to the packed form, with the exception of the direct conversions
//! between HSL, HSLA, and HSV.
//!
//! All representations are immutable values. They implement [`Display`] with
//! a fixed, locale-independent format. For floating point coordinates, the
//! formatter's precision overrides the default of two decimals.
//! ```
//! # use colorx::{Color, repr::Rgb};
//! let pink = Rgb::new(233, 30, 99);
//! assert_eq!(format!("{}", pink), "233 / 30 / 99");
//! assert_eq!(format!("{}", pink.to_hsl()), "339.61° / 0.82 / 0.52");
//! assert_eq!(format!("{:.1}", pink.to_hsl()), "339.6° / 0.8 / 0.5");
//! assert_eq!(format!("{}", pink.to_cmyk()), "0.00 / 0.87 / 0.58 / 0.09");
//! ```
//!
//! [`Display`]: std::fmt::Display
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::{hsl_to_packed, packed_to_hsl};
use crate::core::{
    cmyk_to_rgb, from_24bit, from_8bit, hsl_to_hsv, hsv_to_hsl, hsv_to_rgb, parse, rgb_to_cmyk,
    rgb_to_hsv, to_24bit, to_8bit, to_eq_coordinates, to_eq_polar, to_hex_string,
};
use crate::error::ColorFormatError;
use crate::{Color, Float, PackedColor};

/// Write the floating point coordinates separated by slashes, using the
/// formatter's precision or two decimals by default. The hue, if any, gets a
/// degree sign.
fn write_coordinates(
    f: &mut std::fmt::Formatter<'_>,
    coordinates: &[Float],
    with_hue: bool,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(2);
    for (index, value) in coordinates.iter().enumerate() {
        if 0 < index {
            f.write_str(" / ")?;
        }
        f.write_fmt(format_args!("{:.*}", precision, value))?;
        if with_hue && index == 0 {
            f.write_str("°")?;
        }
    }
    Ok(())
}

// ====================================================================================================================
// RGB
// ====================================================================================================================

/// An opaque color with 8-bit red, green, and blue channels.
///
/// ```
/// # use colorx::{Color, PackedColor, repr::Rgb};
/// let pink = Rgb::new(0xe9, 0x1e, 0x63);
/// assert_eq!(pink.as_ref(), &[233_u8, 30, 99]);
/// assert_eq!(pink.to_packed(), PackedColor::new(0xffe9_1e63));
///
/// // Alpha is dropped.
/// let translucent = PackedColor::new(0x80e9_1e63);
/// assert_eq!(Rgb::from_packed(translucent), pink);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Get the red channel.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Get the green channel.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue channel.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Rgb {
        /// Create a new RGB color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(red: u8, green: u8, blue: u8) -> Self {
            Self::new(red, green, blue)
        }

        /// Get the red channel. <i class=python-only>Python only!</i>
        #[getter(red)]
        pub fn py_red(&self) -> u8 {
            self.0[0]
        }

        /// Get the green channel. <i class=python-only>Python only!</i>
        #[getter(green)]
        pub fn py_green(&self) -> u8 {
            self.0[1]
        }

        /// Get the blue channel. <i class=python-only>Python only!</i>
        #[getter(blue)]
        pub fn py_blue(&self) -> u8 {
            self.0[2]
        }
    }
}

impl Color for Rgb {
    fn to_packed(&self) -> PackedColor {
        let [r, g, b] = self.0;
        PackedColor::from_rgb(r, g, b)
    }

    fn from_packed(packed: PackedColor) -> Self {
        Self(packed.to_24bit())
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_argb(&self) -> Argb {
        let [r, g, b] = self.0;
        Argb::new(0xff, r, g, b)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("{} / {} / {}", r, g, b))
    }
}

// ====================================================================================================================
// ARGB
// ====================================================================================================================

/// A color with 8-bit alpha, red, green, and blue channels.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argb([u8; 4]);

impl Argb {
    /// Create a new ARGB color.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self([alpha, red, green, blue])
    }

    /// Get the alpha channel.
    pub const fn alpha(&self) -> u8 {
        self.0[0]
    }

    /// Get the red channel.
    pub const fn red(&self) -> u8 {
        self.0[1]
    }

    /// Get the green channel.
    pub const fn green(&self) -> u8 {
        self.0[2]
    }

    /// Get the blue channel.
    pub const fn blue(&self) -> u8 {
        self.0[3]
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Argb {
        /// Create a new ARGB color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
            Self::new(alpha, red, green, blue)
        }

        /// Get the alpha channel. <i class=python-only>Python only!</i>
        #[getter(alpha)]
        pub fn py_alpha(&self) -> u8 {
            self.0[0]
        }

        /// Get the red channel. <i class=python-only>Python only!</i>
        #[getter(red)]
        pub fn py_red(&self) -> u8 {
            self.0[1]
        }

        /// Get the green channel. <i class=python-only>Python only!</i>
        #[getter(green)]
        pub fn py_green(&self) -> u8 {
            self.0[2]
        }

        /// Get the blue channel. <i class=python-only>Python only!</i>
        #[getter(blue)]
        pub fn py_blue(&self) -> u8 {
            self.0[3]
        }
    }
}

impl Color for Argb {
    fn to_packed(&self) -> PackedColor {
        PackedColor::new(u32::from_be_bytes(self.0))
    }

    fn from_packed(packed: PackedColor) -> Self {
        Self(packed.value().to_be_bytes())
    }

    fn to_rgb(&self) -> Rgb {
        let [_, r, g, b] = self.0;
        Rgb::new(r, g, b)
    }

    fn to_argb(&self) -> Argb {
        *self
    }
}

impl AsRef<[u8; 4]> for Argb {
    fn as_ref(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for Argb {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, r, g, b] = self.0;
        f.write_fmt(format_args!("{} / {} / {} / {}", a, r, g, b))
    }
}

// ====================================================================================================================
// Hexadecimal Notation
// ====================================================================================================================

/// A color in hashed hexadecimal notation.
///
/// Parsing accepts `#RRGGBB` and `#AARRGGBB` with digits in either case. The
/// former is opaque. Either way, the color is stored in canonical `#AARRGGBB`
/// notation with uppercase digits.
///
/// ```
/// # use colorx::{Color, error::ColorFormatError, repr::Hex};
/// let pink = Hex::new("#e91e63")?;
/// assert_eq!(pink.as_str(), "#FFE91E63");
/// assert_eq!(pink, "#FFE91E63".parse()?);
/// assert_eq!(
///     "not-a-color".parse::<Hex>(),
///     Err(ColorFormatError::UnknownFormat)
/// );
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    value: PackedColor,
    text: String,
}

impl Hex {
    /// Parse a new hexadecimal color.
    ///
    /// # Errors
    ///
    /// This function fails if the string, after trimming white space, is not
    /// in `#RRGGBB` or `#AARRGGBB` notation.
    pub fn new(s: &str) -> Result<Self, ColorFormatError> {
        let value = PackedColor::new(parse(s)?);
        Ok(Self::from_packed(value))
    }

    /// Get the canonical notation.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Hex {
        /// Parse a new hexadecimal color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(s: &str) -> Result<Self, ColorFormatError> {
            Self::new(s)
        }

        /// Get the canonical notation. <i class=python-only>Python only!</i>
        #[getter(text)]
        pub fn py_text(&self) -> String {
            self.text.clone()
        }
    }
}

impl Color for Hex {
    fn to_packed(&self) -> PackedColor {
        self.value
    }

    fn from_packed(packed: PackedColor) -> Self {
        Self {
            value: packed,
            text: to_hex_string(packed.value()),
        }
    }

    fn to_hex_string(&self) -> String {
        self.text.clone()
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for Hex {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// ====================================================================================================================
// HSL
// ====================================================================================================================

/// An opaque color with hue, saturation, and lightness.
///
/// Hue is measured in degrees and ranges `0..360`. Saturation and lightness
/// range `0..=1`. The constructor accepts any values, but conversion to the
/// packed form wraps the hue and clamps the resulting channels. Equality and
/// hashing compare coordinates at reduced precision and hues modulo 360.
///
/// ```
/// # use colorx::{Color, PackedColor, repr::Hsl};
/// let pink = Hsl::from_packed(PackedColor::new(0xffe9_1e63));
/// assert!((pink.hue() - 339.61).abs() < 0.01);
/// assert_eq!(pink.to_packed(), PackedColor::new(0xffe9_1e63));
/// assert_eq!(Hsl::new(365.0, 0.5, 0.5), Hsl::new(5.0, 0.5, 0.5));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug)]
pub struct Hsl([Float; 3]);

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self([hue, saturation, lightness])
    }

    /// Get the hue.
    pub const fn hue(&self) -> Float {
        self.0[0]
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.0[1]
    }

    /// Get the lightness.
    pub const fn lightness(&self) -> Float {
        self.0[2]
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Hsl {
        /// Create a new HSL color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(hue: Float, saturation: Float, lightness: Float) -> Self {
            Self::new(hue, saturation, lightness)
        }

        /// Get the hue. <i class=python-only>Python only!</i>
        #[getter(hue)]
        pub fn py_hue(&self) -> Float {
            self.0[0]
        }

        /// Get the saturation. <i class=python-only>Python only!</i>
        #[getter(saturation)]
        pub fn py_saturation(&self) -> Float {
            self.0[1]
        }

        /// Get the lightness. <i class=python-only>Python only!</i>
        #[getter(lightness)]
        pub fn py_lightness(&self) -> Float {
            self.0[2]
        }
    }
}

impl Color for Hsl {
    fn to_packed(&self) -> PackedColor {
        hsl_to_packed(&self.0, 0xff)
    }

    fn from_packed(packed: PackedColor) -> Self {
        Self(packed_to_hsl(packed))
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }

    fn to_hsla(&self) -> Hsla {
        let [h, s, l] = self.0;
        Hsla::new(h, s, l, 1.0)
    }

    fn to_hsv(&self) -> Hsv {
        Hsv(hsl_to_hsv(&self.0))
    }
}

impl AsRef<[Float; 3]> for Hsl {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        to_eq_polar(&self.0) == to_eq_polar(&other.0)
    }
}

impl Eq for Hsl {}

impl std::hash::Hash for Hsl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_polar(&self.0).hash(state);
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_coordinates(f, &self.0, true)
    }
}

// ====================================================================================================================
// HSLA
// ====================================================================================================================

/// A color with hue, saturation, lightness, and alpha.
///
/// Alpha ranges `0..=1`. It is rounded to the nearest 8-bit value when
/// converting to the packed form, so that packed colors survive the round trip
/// through HSLA.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug)]
pub struct Hsla([Float; 4]);

impl Hsla {
    /// Create a new HSLA color.
    pub const fn new(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self([hue, saturation, lightness, alpha])
    }

    /// Get the hue.
    pub const fn hue(&self) -> Float {
        self.0[0]
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.0[1]
    }

    /// Get the lightness.
    pub const fn lightness(&self) -> Float {
        self.0[2]
    }

    /// Get the alpha.
    pub const fn alpha(&self) -> Float {
        self.0[3]
    }

    fn hsl(&self) -> [Float; 3] {
        let [h, s, l, _] = self.0;
        [h, s, l]
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Hsla {
        /// Create a new HSLA color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
            Self::new(hue, saturation, lightness, alpha)
        }

        /// Get the hue. <i class=python-only>Python only!</i>
        #[getter(hue)]
        pub fn py_hue(&self) -> Float {
            self.0[0]
        }

        /// Get the saturation. <i class=python-only>Python only!</i>
        #[getter(saturation)]
        pub fn py_saturation(&self) -> Float {
            self.0[1]
        }

        /// Get the lightness. <i class=python-only>Python only!</i>
        #[getter(lightness)]
        pub fn py_lightness(&self) -> Float {
            self.0[2]
        }

        /// Get the alpha. <i class=python-only>Python only!</i>
        #[getter(alpha)]
        pub fn py_alpha(&self) -> Float {
            self.0[3]
        }
    }
}

impl Color for Hsla {
    fn to_packed(&self) -> PackedColor {
        hsl_to_packed(&self.hsl(), to_8bit(self.0[3]))
    }

    fn from_packed(packed: PackedColor) -> Self {
        let [h, s, l] = packed_to_hsl(packed);
        Self([h, s, l, from_8bit(packed.alpha())])
    }

    fn to_hsl(&self) -> Hsl {
        Hsl(self.hsl())
    }

    fn to_hsla(&self) -> Hsla {
        *self
    }

    fn to_hsv(&self) -> Hsv {
        Hsv(hsl_to_hsv(&self.hsl()))
    }
}

impl AsRef<[Float; 4]> for Hsla {
    fn as_ref(&self) -> &[Float; 4] {
        &self.0
    }
}

impl PartialEq for Hsla {
    fn eq(&self, other: &Self) -> bool {
        to_eq_polar(&self.0) == to_eq_polar(&other.0)
    }
}

impl Eq for Hsla {}

impl std::hash::Hash for Hsla {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_polar(&self.0).hash(state);
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_coordinates(f, &self.0, true)
    }
}

// ====================================================================================================================
// HSV
// ====================================================================================================================

/// An opaque color with hue, saturation, and value.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug)]
pub struct Hsv([Float; 3]);

impl Hsv {
    /// Create a new HSV color.
    pub const fn new(hue: Float, saturation: Float, value: Float) -> Self {
        Self([hue, saturation, value])
    }

    /// Get the hue.
    pub const fn hue(&self) -> Float {
        self.0[0]
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.0[1]
    }

    /// Get the value.
    pub const fn value(&self) -> Float {
        self.0[2]
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Hsv {
        /// Create a new HSV color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(hue: Float, saturation: Float, value: Float) -> Self {
            Self::new(hue, saturation, value)
        }

        /// Get the hue. <i class=python-only>Python only!</i>
        #[getter(hue)]
        pub fn py_hue(&self) -> Float {
            self.0[0]
        }

        /// Get the saturation. <i class=python-only>Python only!</i>
        #[getter(saturation)]
        pub fn py_saturation(&self) -> Float {
            self.0[1]
        }

        /// Get the value. <i class=python-only>Python only!</i>
        #[getter(value)]
        pub fn py_value(&self) -> Float {
            self.0[2]
        }
    }
}

impl Color for Hsv {
    fn to_packed(&self) -> PackedColor {
        let [r, g, b] = to_24bit(&hsv_to_rgb(&self.0));
        PackedColor::from_rgb(r, g, b)
    }

    fn from_packed(packed: PackedColor) -> Self {
        let [r, g, b] = packed.to_24bit();
        Self(rgb_to_hsv(&from_24bit(r, g, b)))
    }

    fn to_hsl(&self) -> Hsl {
        Hsl(hsv_to_hsl(&self.0))
    }

    fn to_hsla(&self) -> Hsla {
        let [h, s, l] = hsv_to_hsl(&self.0);
        Hsla::new(h, s, l, 1.0)
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }
}

impl AsRef<[Float; 3]> for Hsv {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        to_eq_polar(&self.0) == to_eq_polar(&other.0)
    }
}

impl Eq for Hsv {}

impl std::hash::Hash for Hsv {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_polar(&self.0).hash(state);
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_coordinates(f, &self.0, true)
    }
}

// ====================================================================================================================
// CMYK
// ====================================================================================================================

/// An opaque color with cyan, magenta, yellow, and key (black) components.
///
/// All components range `0..=1`. Pure black, i.e., a key of 1, has no cyan,
/// magenta, or yellow, which the constructor enforces.
///
/// ```
/// # use colorx::{Color, repr::Cmyk};
/// let black = Cmyk::new(0.2, 0.3, 0.4, 1.0);
/// assert_eq!(black, Cmyk::new(0.0, 0.0, 0.0, 1.0));
/// assert_eq!(black, Cmyk::black());
/// assert_eq!(Cmyk::white(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug)]
pub struct Cmyk([Float; 4]);

impl Cmyk {
    /// Create a new CMYK color.
    pub fn new(cyan: Float, magenta: Float, yellow: Float, key: Float) -> Self {
        if 1.0 <= key {
            Self([0.0, 0.0, 0.0, key])
        } else {
            Self([cyan, magenta, yellow, key])
        }
    }

    /// Get the cyan component.
    pub const fn cyan(&self) -> Float {
        self.0[0]
    }

    /// Get the magenta component.
    pub const fn magenta(&self) -> Float {
        self.0[1]
    }

    /// Get the yellow component.
    pub const fn yellow(&self) -> Float {
        self.0[2]
    }

    /// Get the key component.
    pub const fn key(&self) -> Float {
        self.0[3]
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    Cmyk {
        /// Create a new CMYK color. <i class=python-only>Python only!</i>
        #[new]
        pub fn py_new(cyan: Float, magenta: Float, yellow: Float, key: Float) -> Self {
            Self::new(cyan, magenta, yellow, key)
        }

        /// Get the cyan component. <i class=python-only>Python only!</i>
        #[getter(cyan)]
        pub fn py_cyan(&self) -> Float {
            self.0[0]
        }

        /// Get the magenta component. <i class=python-only>Python only!</i>
        #[getter(magenta)]
        pub fn py_magenta(&self) -> Float {
            self.0[1]
        }

        /// Get the yellow component. <i class=python-only>Python only!</i>
        #[getter(yellow)]
        pub fn py_yellow(&self) -> Float {
            self.0[2]
        }

        /// Get the key component. <i class=python-only>Python only!</i>
        #[getter(key)]
        pub fn py_key(&self) -> Float {
            self.0[3]
        }
    }
}

impl Color for Cmyk {
    fn to_packed(&self) -> PackedColor {
        let [r, g, b] = to_24bit(&cmyk_to_rgb(&self.0));
        PackedColor::from_rgb(r, g, b)
    }

    fn from_packed(packed: PackedColor) -> Self {
        let [r, g, b] = packed.to_24bit();
        Self(rgb_to_cmyk(&from_24bit(r, g, b)))
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }
}

impl AsRef<[Float; 4]> for Cmyk {
    fn as_ref(&self) -> &[Float; 4] {
        &self.0
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.0) == to_eq_coordinates(&other.0)
    }
}

impl Eq for Cmyk {}

impl std::hash::Hash for Cmyk {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.0).hash(state);
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_coordinates(f, &self.0, false)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Argb, Cmyk, Hex, Hsl, Hsla, Hsv, Rgb};
    use crate::core::assert_within;
    use crate::error::ColorFormatError;
    use crate::{Color, Float, PackedColor};

    const PINK: PackedColor = PackedColor::new(0xffe9_1e63);
    const EPSILON: Float = 1e-9;

    fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
        use std::hash::{DefaultHasher, Hasher};
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_conversions() {
        assert_eq!(PINK.to_rgb(), Rgb::new(233, 30, 99));
        assert_eq!(PINK.to_argb(), Argb::new(255, 233, 30, 99));
        assert_eq!(PINK.to_hex().as_str(), "#FFE91E63");
        assert_eq!(PINK.to_hex_string(), "#FFE91E63");

        let hsl = PINK.to_hsl();
        assert_within!(hsl.hue(), 339.60591133004925, EPSILON);
        assert_within!(hsl.saturation(), 0.8218623481781375, EPSILON);
        assert_within!(hsl.lightness(), 0.5156862745098039, EPSILON);

        let hsv = PINK.to_hsv();
        assert_within!(hsv.hue(), 339.60591133004925, EPSILON);
        assert_within!(hsv.saturation(), 0.871244635193133, EPSILON);
        assert_within!(hsv.value(), 0.9137254901960784, EPSILON);

        let cmyk = PINK.to_cmyk();
        assert_within!(cmyk.cyan(), 0.0, EPSILON);
        assert_within!(cmyk.magenta(), 0.871244635193133, EPSILON);
        assert_within!(cmyk.yellow(), 0.5751072961373391, EPSILON);
        assert_within!(cmyk.key(), 0.0862745098039216, EPSILON);

        // Every representation gets back to the same packed color.
        assert_eq!(hsl.to_packed(), PINK);
        assert_eq!(hsv.to_packed(), PINK);
        assert_eq!(cmyk.to_packed(), PINK);
        assert_eq!(cmyk.to_hsl(), hsl);
        assert_eq!(hsv.to_cmyk(), cmyk);
    }

    #[test]
    fn test_complementary_coordinates() {
        let mint = PackedColor::new(0xff1e_e9a4);
        let hsv = mint.to_hsv();
        assert_within!(hsv.hue(), 159.60591133004925, EPSILON);
        assert_within!(hsv.saturation(), 0.871244635193133, EPSILON);
        assert_within!(hsv.value(), 0.9137254901960784, EPSILON);

        let cmyk = mint.to_cmyk();
        assert_within!(cmyk.cyan(), 0.871244635193133, EPSILON);
        assert_within!(cmyk.magenta(), 0.0, EPSILON);
        assert_within!(cmyk.yellow(), 0.2961373390557939, EPSILON);
        assert_within!(cmyk.key(), 0.0862745098039216, EPSILON);

        assert_eq!(Cmyk::new(0.0, 0.87, 0.58, 0.09).to_rgb(), Rgb::new(232, 30, 97));
    }

    #[test]
    fn test_alpha_policy() {
        let translucent = PINK.with_alpha(0x80);
        assert_eq!(translucent.to_rgb().to_packed(), PINK);
        assert_eq!(translucent.to_hsl().to_packed(), PINK);
        assert_eq!(translucent.to_hsv().to_packed(), PINK);
        assert_eq!(translucent.to_cmyk().to_packed(), PINK);

        assert_eq!(translucent.to_argb().to_packed(), translucent);
        assert_eq!(translucent.to_hex().to_packed(), translucent);
        assert_eq!(translucent.to_hsla().to_packed(), translucent);
        assert_within!(translucent.to_hsla().alpha(), 128.0 / 255.0, EPSILON);

        // Alpha rounds to the nearest channel value.
        assert_eq!(Hsla::new(0.0, 0.0, 0.0, 0.5).to_packed().alpha(), 128);
        assert_eq!(Hsla::new(0.0, 0.0, 0.0, 0.499).to_packed().alpha(), 127);

        assert_eq!(Rgb::new(1, 2, 3).to_argb(), Argb::new(255, 1, 2, 3));
        assert_eq!(Argb::new(9, 1, 2, 3).to_rgb(), Rgb::new(1, 2, 3));
        assert_eq!(Hsl::new(10.0, 0.5, 0.5).to_hsla().alpha(), 1.0);
    }

    #[test]
    fn test_direct_conversions() {
        // Avoiding 8-bit channels preserves precision.
        let hsl = Hsl::new(123.456, 0.333, 0.444);
        let hsv = hsl.to_hsv();
        let [h, s, l] = *hsv.to_hsl().as_ref();
        assert_within!(h, 123.456, EPSILON);
        assert_within!(s, 0.333, EPSILON);
        assert_within!(l, 0.444, EPSILON);

        let hsla = Hsla::new(123.456, 0.333, 0.444, 0.25);
        assert_eq!(hsla.to_hsl(), hsl);
        assert_eq!(hsla.to_hsv(), hsv);
        assert_eq!(hsv.to_hsla().alpha(), 1.0);
    }

    #[test]
    fn test_hex() -> Result<(), ColorFormatError> {
        let hex = Hex::new("#e91e63")?;
        assert_eq!(hex, Hex::new(" #FFE91E63 ")?);
        assert_eq!(hex.to_packed(), PINK);
        assert_eq!(hex.to_string(), "#FFE91E63");
        assert_eq!(Hex::new("#80E91E63")?.to_argb().alpha(), 0x80);

        assert_eq!(Hex::new("not-a-color"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(Hex::new("#12345"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(Hex::new("#12345z"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(PINK.to_rgb().to_string(), "233 / 30 / 99");
        assert_eq!(PINK.to_argb().to_string(), "255 / 233 / 30 / 99");
        assert_eq!(PINK.to_hsl().to_string(), "339.61° / 0.82 / 0.52");
        assert_eq!(PINK.to_hsla().to_string(), "339.61° / 0.82 / 0.52 / 1.00");
        assert_eq!(PINK.to_hsv().to_string(), "339.61° / 0.87 / 0.91");
        assert_eq!(PINK.to_cmyk().to_string(), "0.00 / 0.87 / 0.58 / 0.09");
        assert_eq!(format!("{:.3}", PINK.to_hsv()), "339.606° / 0.871 / 0.914");
        assert_eq!(format!("{:.0}", PINK.to_cmyk()), "0 / 1 / 1 / 0");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Hsl::new(365.0, 0.5, 0.5), Hsl::new(5.0, 0.5, 0.5));
        assert_eq!(
            hash_of(&Hsl::new(365.0, 0.5, 0.5)),
            hash_of(&Hsl::new(5.0, 0.5, 0.5))
        );
        assert_eq!(Hsv::new(-90.0, 0.5, 0.5), Hsv::new(270.0, 0.5, 0.5));
        assert_eq!(Hsla::new(0.0, 0.0, -0.0, 1.0), Hsla::new(360.0, 0.0, 0.0, 1.0));
        assert_ne!(Hsl::new(5.0, 0.5, 0.5), Hsl::new(5.0, 0.5, 0.51));

        assert_eq!(Cmyk::new(0.1, 0.2, 0.3, 0.4), Cmyk::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(
            hash_of(&Cmyk::new(0.1 + 0.2, 0.0, 0.0, 0.0)),
            hash_of(&Cmyk::new(0.3, 0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Rgb::white(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::black(), Rgb::new(0, 0, 0));
        assert_eq!(Cmyk::white(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Cmyk::black(), Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Hsl::white().lightness(), 1.0);
        assert_eq!(Hsla::black().alpha(), 1.0);
        assert_eq!(Hex::white().as_str(), "#FFFFFFFF");
    }

    #[test]
    fn test_derivations_keep_representation() {
        let rgb = Rgb::new(233, 30, 99);
        assert!(rgb.is_dark());
        assert!(!Rgb::new(30, 233, 164).is_dark());
        assert_eq!(rgb.complementary(), Rgb::new(30, 233, 164));
        assert_eq!(rgb.triadic(), (Rgb::new(99, 233, 30), Rgb::new(30, 99, 233)));
        assert_eq!(rgb.contrasting(), Rgb::white());
        assert_eq!(Rgb::new(30, 233, 164).contrasting(), Rgb::black());

        let cmyk = rgb.to_cmyk();
        assert_eq!(cmyk.contrasting(), Cmyk::white());
        assert_eq!(cmyk.complementary().to_rgb(), Rgb::new(30, 233, 164));

        let hex = rgb.to_hex();
        assert_eq!(hex.lighten(0.2).as_str(), "#FFF27BA3");
        assert_eq!(hex.darken_percent(20).as_str(), "#FF930E3B");
    }
}
