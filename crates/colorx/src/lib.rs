//! # colorx
//!
//! Colorx converts colors between representations and derives related colors
//! from them.
//!
//! ## 1. Overview
//!
//! Colorx's main abstractions are:
//!
//!   * [`PackedColor`] is the **canonical form**, a 32-bit value with 8-bit
//!     alpha, red, green, and blue channels. Every conversion routes through
//!     it, unless a direct formula avoids quantization.
//!   * The [`repr`] module offers the **color representations**
//!     [`Rgb`](repr::Rgb), [`Argb`](repr::Argb), [`Hex`](repr::Hex),
//!     [`Hsl`](repr::Hsl), [`Hsla`](repr::Hsla), [`Hsv`](repr::Hsv), and
//!     [`Cmyk`](repr::Cmyk).
//!   * The [`Color`] trait provides **conversions and derivations** for all
//!     representations: lighter and darker variants, ramps of shades and
//!     tints, hue harmonies, the darkness test, and contrasting picks. Each
//!     derivation is implemented once and returns the receiver's
//!     representation.
//!   * [`Ramp`] is the lazy, restartable iterator over **shades and tints**.
//!
//! All types are immutable values and all operations are pure functions.
//!
//!
//! ## 2. Deriving Colors
//!
//! ```
//! # use colorx::{Color, error::ColorFormatError, repr::Hex};
//! let pink: Hex = "#E91E63".parse()?;
//! assert_eq!(pink.to_hex_string(), "#FFE91E63");
//!
//! // Harmonies rotate the hue.
//! assert_eq!(pink.complementary().as_str(), "#FF1EE9A4");
//! let (first, second) = pink.triadic();
//! assert_eq!((first.as_str(), second.as_str()), ("#FF63E91E", "#FF1E63E9"));
//!
//! // Dark colors contrast with white.
//! assert!(pink.is_dark());
//! assert_eq!(pink.contrasting(), Hex::white());
//!
//! // Ramps include both endpoints.
//! let shades: Vec<_> = pink.default_shades().collect();
//! assert_eq!(shades.len(), 11);
//! assert_eq!(shades[0], pink);
//! assert_eq!(shades[10], Hex::black());
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//!   * **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   * **`pyffi`** enables Python bindings via [PyO3](https://pyo3.rs).
//!     Every color representation becomes a Python class with the same
//!     conversions and derivations. Errors become `ValueError`s. This
//!     feature is disabled by default.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
pub mod error;
mod packed;
mod ramp;
pub mod repr;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use color::Color;
pub use crate::core::{DARKNESS_THRESHOLD, DEFAULT_COUNT, LIGHTNESS_GRID};
pub use packed::PackedColor;
pub use ramp::Ramp;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorx(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PackedColor>()?;
    m.add_class::<repr::Rgb>()?;
    m.add_class::<repr::Argb>()?;
    m.add_class::<repr::Hex>()?;
    m.add_class::<repr::Hsl>()?;
    m.add_class::<repr::Hsla>()?;
    m.add_class::<repr::Hsv>()?;
    m.add_class::<repr::Cmyk>()?;

    m.add("DEFAULT_COUNT", DEFAULT_COUNT)?;
    m.add("LIGHTNESS_GRID", LIGHTNESS_GRID)?;
    m.add("DARKNESS_THRESHOLD", DARKNESS_THRESHOLD)?;

    Ok(())
}
