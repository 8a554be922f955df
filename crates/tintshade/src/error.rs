//! Utility module with tintshade's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a component value that is out of bounds for some
/// range. The ranges used by this crate include:
///
///   * `0..=359` for the hue of [`Hsl`](crate::Hsl) in degrees;
///   * `0..=100` for the saturation and lightness of [`Hsl`](crate::Hsl) in
///     percent.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Like its Python counterpart, this enumeration has unit variants only. The
/// variants distinguish the three ways a hashed hexadecimal color can go
/// wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`. For example, `3498db` is
    /// missing the leading hash.
    UnknownFormat,

    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing a hexadecimal digit and `#3498db80` has an alpha
    /// channel, which is not supported.
    UnexpectedCharacters,

    /// A color format with the correct length but a character that is not a
    /// hexadecimal digit. For example, `#efg` has a malformed third
    /// coordinate.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have 3 or 6 hexadecimal digits after `#`")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal digits but are not")
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

// ====================================================================================================================
