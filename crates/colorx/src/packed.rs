#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{format, parse};
use crate::error::ColorFormatError;
use crate::Color;

/// A color packed into 32 bits.
///
/// The packed color is the canonical interchange form between all color
/// representations. Its value places alpha, red, green, and blue, 8 bits each,
/// from most to least significant byte, i.e., `alpha << 24 | red << 16 | green
/// << 8 | blue`.
///
/// ```
/// # use colorx::PackedColor;
/// let pink = PackedColor::from_rgb(0xe9, 0x1e, 0x63);
/// assert_eq!(pink.value(), 0xffe9_1e63);
/// assert_eq!(pink.alpha(), 255);
/// assert_eq!(pink.green(), 30);
/// assert_eq!(format!("{}", pink), "#FFE91E63");
/// ```
///
/// Since packed colors also implement [`Color`], they support all conversions
/// and derivations directly.
/// ```
/// # use colorx::{Color, PackedColor};
/// let pink = PackedColor::new(0xffe9_1e63);
/// assert_eq!(pink.complementary(), PackedColor::new(0xff1e_e9a4));
/// assert!(pink.is_dark());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorx"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Opaque white.
    pub const WHITE: PackedColor = PackedColor(0xffff_ffff);

    /// Opaque black.
    pub const BLACK: PackedColor = PackedColor(0xff00_0000);

    /// Fully transparent black.
    pub const TRANSPARENT: PackedColor = PackedColor(0);

    /// Create a new packed color from its 32-bit value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a new packed color from alpha, red, green, and blue channels.
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from_be_bytes([alpha, red, green, blue]))
    }

    /// Create a new, opaque packed color from red, green, and blue channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xff, red, green, blue)
    }

    /// Get the 32-bit value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the alpha channel.
    pub const fn alpha(&self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Get the red channel.
    pub const fn red(&self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Get the green channel.
    pub const fn green(&self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Get the blue channel.
    pub const fn blue(&self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Get the red, green, and blue channels.
    pub const fn to_24bit(&self) -> [u8; 3] {
        let [_, r, g, b] = self.0.to_be_bytes();
        [r, g, b]
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(&self, alpha: u8) -> Self {
        Self((self.0 & 0x00ff_ffff) | (alpha as u32) << 24)
    }
}

#[cfg(feature = "pyffi")]
crate::color::py_color! {
    PackedColor {
        /// Create a new packed color from its 32-bit value. <i
        /// class=python-only>Python only!</i>
        #[new]
        pub fn py_new(value: u32) -> Self {
            Self::new(value)
        }

        /// Parse the hashed hexadecimal string. <i class=python-only>Python
        /// only!</i>
        #[staticmethod]
        #[pyo3(name = "parse")]
        pub fn py_parse(s: &str) -> Result<Self, ColorFormatError> {
            s.parse()
        }

        /// Get the 32-bit value. <i class=python-only>Python only!</i>
        #[getter(value)]
        pub fn py_value(&self) -> u32 {
            self.0
        }

        /// Get the alpha channel. <i class=python-only>Python only!</i>
        #[getter(alpha)]
        pub fn py_alpha(&self) -> u8 {
            self.alpha()
        }

        /// Get the red channel. <i class=python-only>Python only!</i>
        #[getter(red)]
        pub fn py_red(&self) -> u8 {
            self.red()
        }

        /// Get the green channel. <i class=python-only>Python only!</i>
        #[getter(green)]
        pub fn py_green(&self) -> u8 {
            self.green()
        }

        /// Get the blue channel. <i class=python-only>Python only!</i>
        #[getter(blue)]
        pub fn py_blue(&self) -> u8 {
            self.blue()
        }

        /// Replace the alpha channel. <i class=python-only>Python only!</i>
        #[pyo3(name = "with_alpha")]
        pub fn py_with_alpha(&self, alpha: u8) -> Self {
            self.with_alpha(alpha)
        }
    }
}

impl Color for PackedColor {
    fn to_packed(&self) -> PackedColor {
        *self
    }

    fn from_packed(packed: PackedColor) -> Self {
        packed
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(value: PackedColor) -> Self {
        value.0
    }
}

impl std::str::FromStr for PackedColor {
    type Err = ColorFormatError;

    /// Parse a color in `#RRGGBB` or `#AARRGGBB` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl std::fmt::Display for PackedColor {
    /// Format this color as `#AARRGGBB` with uppercase digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.0, f)
    }
}
