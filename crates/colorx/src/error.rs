//! Utility module with colorx's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// only range used by this crate is `1..` for the number of steps in a
/// [`Ramp`](crate::Ramp) of shades or tints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if *self.expected.end() == usize::MAX {
            f.write_fmt(format_args!(
                "{} does not fit into range {}..",
                self.value,
                self.expected.start()
            ))
        } else {
            f.write_fmt(format_args!(
                "{} does not fit into range {}..={}",
                self.value,
                self.expected.start(),
                self.expected.end()
            ))
        }
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Like all errors in this crate, the variants carry no state, so that they
/// map onto Python exceptions without loss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing hexadecimal digits, whereas
    /// `#💩00` contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number. For example,
    /// `#00ff0g` has a malformed blue channel.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => f.write_str(
                "color format should have 6 or 8 hexadecimal digits after `#` but does not",
            ),
            MalformedHex => {
                f.write_str("color format channels should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, OutOfBoundsError};

    #[test]
    fn test_display() {
        assert_eq!(
            OutOfBoundsError::new(0_usize, 1..=usize::MAX).to_string(),
            "0 does not fit into range 1.."
        );
        assert_eq!(
            OutOfBoundsError::new(7_u8, 0..=5).to_string(),
            "7 does not fit into range 0..=5"
        );
        assert_eq!(
            ColorFormatError::UnknownFormat.to_string(),
            "color format should start with `#`"
        );
    }
}
