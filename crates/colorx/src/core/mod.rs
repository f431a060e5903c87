mod conversion;
mod equality;
mod hue;
mod luminance;
mod ramp;
mod string;

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, from_24bit, from_8bit, hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb,
    rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, to_24bit, to_8bit,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_within;
pub use equality::to_eq_bits;
pub(crate) use equality::{to_eq_coordinates, to_eq_polar};

// hue
pub(crate) use hue::{rotate_hue, shift_lightness, ANALOGOUS, COMPLEMENTARY, TETRADIC, TRIADIC};

// luminance
pub use luminance::DARKNESS_THRESHOLD;
pub(crate) use luminance::{is_dark, to_luminance};

// ramp
pub use ramp::{DEFAULT_COUNT, LIGHTNESS_GRID};
pub(crate) use ramp::{from_grid, grid_point, to_grid, to_step};

// string
pub(crate) use string::{format, parse, to_hex_string};
