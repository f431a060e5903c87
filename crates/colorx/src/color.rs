use crate::core::{
    from_24bit, hsl_to_rgb, is_dark, rgb_to_hsl, rotate_hue, shift_lightness,
    to_24bit, to_hex_string, to_luminance, ANALOGOUS, COMPLEMENTARY, DEFAULT_COUNT, TETRADIC,
    TRIADIC,
};
use crate::error::OutOfBoundsError;
use crate::repr::{Argb, Cmyk, Hex, Hsl, Hsla, Hsv, Rgb};
use crate::{Float, PackedColor, Ramp};

// ====================================================================================================================
// The Packed Engine
// ====================================================================================================================

/// Convert the packed color to HSL coordinates.
#[inline]
pub(crate) fn packed_to_hsl(packed: PackedColor) -> [Float; 3] {
    let [r, g, b] = packed.to_24bit();
    rgb_to_hsl(&from_24bit(r, g, b))
}

/// Convert the HSL coordinates with the given alpha to a packed color.
#[inline]
pub(crate) fn hsl_to_packed(coordinates: &[Float; 3], alpha: u8) -> PackedColor {
    let [r, g, b] = to_24bit(&hsl_to_rgb(coordinates));
    PackedColor::from_argb(alpha, r, g, b)
}

/// Shift the lightness of the packed color, preserving its alpha.
fn shift(packed: PackedColor, amount: Float) -> PackedColor {
    hsl_to_packed(
        &shift_lightness(&packed_to_hsl(packed), amount),
        packed.alpha(),
    )
}

/// Rotate the hue of the packed color, preserving its alpha.
fn rotate(packed: PackedColor, degrees: Float) -> PackedColor {
    hsl_to_packed(&rotate_hue(&packed_to_hsl(packed), degrees), packed.alpha())
}

/// Compute the relative luminance of the packed color.
fn luminance(packed: PackedColor) -> Float {
    let [r, g, b] = packed.to_24bit();
    to_luminance(&from_24bit(r, g, b))
}

/// Convert the percent into a unit-range amount.
#[inline]
fn percent_to_amount(percent: u8) -> Float {
    percent as Float / 100.0
}

// ====================================================================================================================
// The Color Trait
// ====================================================================================================================

/// A color representation.
///
/// Every color representation converts to and from the canonical
/// [`PackedColor`]. Given these two conversions, this trait provides
/// conversions to every other representation as well as all derivations,
/// i.e., lighter and darker variants, ramps of shades and tints, hue
/// harmonies, and contrasting picks. Derivations compute on the packed form
/// and then convert back, so that their results have the same representation
/// as the receiver.
///
/// Representations override provided conversions only where a direct formula
/// avoids quantizing to 8-bit channels, e.g., between [`Hsl`] and [`Hsv`].
///
/// ```
/// # use colorx::{Color, repr::Rgb};
/// let pink = Rgb::new(233, 30, 99);
/// assert_eq!(pink.to_hex_string(), "#FFE91E63");
/// assert_eq!(pink.complementary(), Rgb::new(30, 233, 164));
/// assert_eq!(pink.contrasting(), Rgb::white());
///
/// let lighter = pink.lighten(0.2);
/// assert_eq!(lighter, Rgb::new(242, 123, 163));
/// assert_eq!(lighter, pink.lighten_percent(20));
/// ```
pub trait Color: Sized {
    /// Convert this color to its packed form.
    fn to_packed(&self) -> PackedColor;

    /// Create a color from its packed form.
    fn from_packed(packed: PackedColor) -> Self;

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to RGB, dropping alpha.
    fn to_rgb(&self) -> Rgb {
        Rgb::from_packed(self.to_packed())
    }

    /// Convert this color to ARGB.
    fn to_argb(&self) -> Argb {
        Argb::from_packed(self.to_packed())
    }

    /// Convert this color to hexadecimal notation.
    fn to_hex(&self) -> Hex {
        Hex::from_packed(self.to_packed())
    }

    /// Convert this color to HSL, dropping alpha.
    fn to_hsl(&self) -> Hsl {
        Hsl::from_packed(self.to_packed())
    }

    /// Convert this color to HSLA.
    fn to_hsla(&self) -> Hsla {
        Hsla::from_packed(self.to_packed())
    }

    /// Convert this color to HSV, dropping alpha.
    fn to_hsv(&self) -> Hsv {
        Hsv::from_packed(self.to_packed())
    }

    /// Convert this color to CMYK, dropping alpha.
    fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_packed(self.to_packed())
    }

    /// Format this color as a `#AARRGGBB` string with uppercase digits.
    fn to_hex_string(&self) -> String {
        to_hex_string(self.to_packed().value())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get opaque white in this representation.
    fn white() -> Self {
        Self::from_packed(PackedColor::WHITE)
    }

    /// Get opaque black in this representation.
    fn black() -> Self {
        Self::from_packed(PackedColor::BLACK)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Lighten this color by the given amount.
    ///
    /// This method adds the amount to the color's HSL lightness, clamping the
    /// result to `0..=1`. Alpha is preserved.
    fn lighten(&self, amount: Float) -> Self {
        Self::from_packed(shift(self.to_packed(), amount))
    }

    /// Lighten this color by the given percentage.
    ///
    /// `lighten_percent(20)` is the same as `lighten(0.2)`.
    fn lighten_percent(&self, percent: u8) -> Self {
        self.lighten(percent_to_amount(percent))
    }

    /// Darken this color by the given amount.
    ///
    /// This method subtracts the amount from the color's HSL lightness,
    /// clamping the result to `0..=1`. Alpha is preserved.
    fn darken(&self, amount: Float) -> Self {
        Self::from_packed(shift(self.to_packed(), -amount))
    }

    /// Darken this color by the given percentage.
    fn darken_percent(&self, percent: u8) -> Self {
        self.darken(percent_to_amount(percent))
    }

    /// Get `count + 1` shades of this color.
    ///
    /// The shades start with this color's lightness and end with lightness 0,
    /// i.e., black. Hue, saturation, and alpha stay the same.
    ///
    /// # Errors
    ///
    /// This method fails if `count` is zero.
    ///
    /// ```
    /// # use colorx::{Color, PackedColor, error::OutOfBoundsError};
    /// let shades: Vec<_> = PackedColor::new(0xff80_8080).shades(4)?.collect();
    /// assert_eq!(shades, vec![
    ///     PackedColor::new(0xff80_8080),
    ///     PackedColor::new(0xff60_6060),
    ///     PackedColor::new(0xff40_4040),
    ///     PackedColor::new(0xff20_2020),
    ///     PackedColor::BLACK,
    /// ]);
    /// assert!(PackedColor::BLACK.shades(0).is_err());
    /// # Ok::<(), OutOfBoundsError>(())
    /// ```
    fn shades(&self, count: usize) -> Result<Ramp<Self>, OutOfBoundsError> {
        Ramp::shades(self.to_packed(), count)
    }

    /// Get `count + 1` tints of this color.
    ///
    /// The tints start with this color's lightness and end with lightness 1,
    /// i.e., white. Hue, saturation, and alpha stay the same.
    ///
    /// # Errors
    ///
    /// This method fails if `count` is zero.
    fn tints(&self, count: usize) -> Result<Ramp<Self>, OutOfBoundsError> {
        Ramp::tints(self.to_packed(), count)
    }

    /// Get the eleven shades for the default count of ten steps.
    fn default_shades(&self) -> Ramp<Self> {
        Ramp::with_end(self.to_packed(), 0, DEFAULT_COUNT)
    }

    /// Get the eleven tints for the default count of ten steps.
    fn default_tints(&self) -> Ramp<Self> {
        Ramp::with_end(self.to_packed(), crate::LIGHTNESS_GRID, DEFAULT_COUNT)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the complementary color, with the hue rotated by 180º.
    fn complementary(&self) -> Self {
        Self::from_packed(rotate(self.to_packed(), COMPLEMENTARY))
    }

    /// Get the two triadic colors, with the hue rotated by 120º and 240º.
    fn triadic(&self) -> (Self, Self) {
        let packed = self.to_packed();
        let [d1, d2] = TRIADIC;
        (
            Self::from_packed(rotate(packed, d1)),
            Self::from_packed(rotate(packed, d2)),
        )
    }

    /// Get the three tetradic colors, with the hue rotated by 90º, 180º, and
    /// 270º.
    fn tetradic(&self) -> (Self, Self, Self) {
        let packed = self.to_packed();
        let [d1, d2, d3] = TETRADIC;
        (
            Self::from_packed(rotate(packed, d1)),
            Self::from_packed(rotate(packed, d2)),
            Self::from_packed(rotate(packed, d3)),
        )
    }

    /// Get the two analogous colors, with the hue rotated by 30º and -30º.
    fn analogous(&self) -> (Self, Self) {
        let packed = self.to_packed();
        let [d1, d2] = ANALOGOUS;
        (
            Self::from_packed(rotate(packed, d1)),
            Self::from_packed(rotate(packed, d2)),
        )
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute this color's relative luminance.
    ///
    /// The luminance ignores alpha.
    fn luminance(&self) -> Float {
        luminance(self.to_packed())
    }

    /// Determine whether this color is dark, i.e., its relative luminance is
    /// below [`DARKNESS_THRESHOLD`](crate::DARKNESS_THRESHOLD).
    fn is_dark(&self) -> bool {
        is_dark(self.luminance())
    }

    /// Pick white for dark colors and black for light ones.
    fn contrasting(&self) -> Self {
        self.contrasting_with(Self::white(), Self::black())
    }

    /// Pick the light color for dark colors and the dark color for light ones.
    fn contrasting_with(&self, light: Self, dark: Self) -> Self {
        if self.is_dark() {
            light
        } else {
            dark
        }
    }
}

// ====================================================================================================================
// Python Methods
// ====================================================================================================================

/// Generate the one `#[pymethods]` block for a color representation.
///
/// The block combines the given type-specific methods, typically constructor
/// and getters, with the conversions and derivations of [`Color`]. Since trait
/// methods cannot be Python methods, each is wrapped by an inherent method
/// with a `py_` prefix, which is renamed for Python.
#[cfg(feature = "pyffi")]
macro_rules! py_color {
    ($name:ident { $($extra:tt)* }) => {
        #[pyo3::pymethods]
        impl $name {
            $($extra)*

            /// Create a color from its packed form. <i class=python-only>Python only!</i>
            #[staticmethod]
            #[pyo3(name = "from_packed")]
            pub fn py_from_packed(packed: $crate::PackedColor) -> Self {
                <Self as $crate::Color>::from_packed(packed)
            }

            /// Convert to packed form. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_packed")]
            pub fn py_to_packed(&self) -> $crate::PackedColor {
                <Self as $crate::Color>::to_packed(self)
            }

            /// Convert to RGB. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_rgb")]
            pub fn py_to_rgb(&self) -> $crate::repr::Rgb {
                <Self as $crate::Color>::to_rgb(self)
            }

            /// Convert to ARGB. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_argb")]
            pub fn py_to_argb(&self) -> $crate::repr::Argb {
                <Self as $crate::Color>::to_argb(self)
            }

            /// Convert to hexadecimal notation. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_hex")]
            pub fn py_to_hex(&self) -> $crate::repr::Hex {
                <Self as $crate::Color>::to_hex(self)
            }

            /// Convert to HSL. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_hsl")]
            pub fn py_to_hsl(&self) -> $crate::repr::Hsl {
                <Self as $crate::Color>::to_hsl(self)
            }

            /// Convert to HSLA. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_hsla")]
            pub fn py_to_hsla(&self) -> $crate::repr::Hsla {
                <Self as $crate::Color>::to_hsla(self)
            }

            /// Convert to HSV. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_hsv")]
            pub fn py_to_hsv(&self) -> $crate::repr::Hsv {
                <Self as $crate::Color>::to_hsv(self)
            }

            /// Convert to CMYK. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_cmyk")]
            pub fn py_to_cmyk(&self) -> $crate::repr::Cmyk {
                <Self as $crate::Color>::to_cmyk(self)
            }

            /// Format as `#AARRGGBB`. <i class=python-only>Python only!</i>
            #[pyo3(name = "to_hex_string")]
            pub fn py_to_hex_string(&self) -> String {
                <Self as $crate::Color>::to_hex_string(self)
            }

            /// Lighten by the given amount. <i class=python-only>Python only!</i>
            #[pyo3(name = "lighten")]
            pub fn py_lighten(&self, amount: $crate::Float) -> Self {
                <Self as $crate::Color>::lighten(self, amount)
            }

            /// Darken by the given amount. <i class=python-only>Python only!</i>
            #[pyo3(name = "darken")]
            pub fn py_darken(&self, amount: $crate::Float) -> Self {
                <Self as $crate::Color>::darken(self, amount)
            }

            /// Get `count + 1` shades. <i class=python-only>Python only!</i>
            #[pyo3(name = "shades", signature = (count = None))]
            pub fn py_shades(&self, count: Option<usize>) -> pyo3::PyResult<Vec<Self>> {
                let count = count.unwrap_or($crate::DEFAULT_COUNT);
                Ok(<Self as $crate::Color>::shades(self, count)?.collect())
            }

            /// Get `count + 1` tints. <i class=python-only>Python only!</i>
            #[pyo3(name = "tints", signature = (count = None))]
            pub fn py_tints(&self, count: Option<usize>) -> pyo3::PyResult<Vec<Self>> {
                let count = count.unwrap_or($crate::DEFAULT_COUNT);
                Ok(<Self as $crate::Color>::tints(self, count)?.collect())
            }

            /// Get the complementary color. <i class=python-only>Python only!</i>
            #[pyo3(name = "complementary")]
            pub fn py_complementary(&self) -> Self {
                <Self as $crate::Color>::complementary(self)
            }

            /// Get the triadic colors. <i class=python-only>Python only!</i>
            #[pyo3(name = "triadic")]
            pub fn py_triadic(&self) -> (Self, Self) {
                <Self as $crate::Color>::triadic(self)
            }

            /// Get the tetradic colors. <i class=python-only>Python only!</i>
            #[pyo3(name = "tetradic")]
            pub fn py_tetradic(&self) -> (Self, Self, Self) {
                <Self as $crate::Color>::tetradic(self)
            }

            /// Get the analogous colors. <i class=python-only>Python only!</i>
            #[pyo3(name = "analogous")]
            pub fn py_analogous(&self) -> (Self, Self) {
                <Self as $crate::Color>::analogous(self)
            }

            /// Compute the relative luminance. <i class=python-only>Python only!</i>
            #[pyo3(name = "luminance")]
            pub fn py_luminance(&self) -> $crate::Float {
                <Self as $crate::Color>::luminance(self)
            }

            /// Determine whether the color is dark. <i class=python-only>Python only!</i>
            #[pyo3(name = "is_dark")]
            pub fn py_is_dark(&self) -> bool {
                <Self as $crate::Color>::is_dark(self)
            }

            /// Pick a contrasting color, white and black by default. <i
            /// class=python-only>Python only!</i>
            #[pyo3(name = "contrasting", signature = (light = None, dark = None))]
            pub fn py_contrasting(&self, light: Option<Self>, dark: Option<Self>) -> Self {
                <Self as $crate::Color>::contrasting_with(
                    self,
                    light.unwrap_or_else(<Self as $crate::Color>::white),
                    dark.unwrap_or_else(<Self as $crate::Color>::black),
                )
            }

            /// Get a debug representation. <i class=python-only>Python only!</i>
            pub fn __repr__(&self) -> String {
                format!("{:?}", self)
            }

            /// Get the display representation. <i class=python-only>Python only!</i>
            pub fn __str__(&self) -> String {
                format!("{}", self)
            }
        }
    };
}

#[cfg(feature = "pyffi")]
pub(crate) use py_color;
