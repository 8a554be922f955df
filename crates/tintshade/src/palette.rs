#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;
use crate::Rgb;

/// A palette of tints and shades derived from one base color.
///
/// A palette has [`Palette::COUNT`] entries. Each entry has the hue and
/// saturation of the base color and a lightness shifted by a multiple of
/// [`Palette::STEP`] percentage points, clamped to `0..=100`. The entries are
/// ordered from darkest shift over the base-equivalent middle entry to the
/// lightest shift.
///
/// A palette is a value. Generating a palette for another base color creates
/// a new palette.
///
/// # Examples
///
/// ```
/// # use tintshade::{ColorFormatError, Palette};
/// let palette: Palette = "#3498db".parse()?;
/// assert_eq!(palette.len(), 7);
/// assert_eq!(palette[0].to_string(), "#124364");
/// assert_eq!(palette.middle().to_string(), "#3398db");
/// assert_eq!(palette[6].to_string(), "#b5daf2");
/// # Ok::<(), ColorFormatError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #124364;"></div>
/// <div style="background-color: #19608f;"></div>
/// <div style="background-color: #217dba;"></div>
/// <div style="background-color: #3398db;"></div>
/// <div style="background-color: #5faee3;"></div>
/// <div style="background-color: #8ac4ea;"></div>
/// <div style="background-color: #b5daf2;"></div>
/// </div>
///
/// Since lightness is clamped, palettes for very dark or very light colors
/// repeat entries at the clamped end.
///
/// ```
/// # use tintshade::{Palette, Rgb};
/// let palette = Palette::new(Rgb::new(0xff, 0xff, 0xff));
/// assert_eq!(
///     palette.to_string(),
///     "#b3b3b3 #cccccc #e6e6e6 #ffffff #ffffff #ffffff #ffffff"
/// );
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, sequence, module = "tintshade"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    base: Rgb,
    entries: [Rgb; Palette::COUNT],
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Palette {
    /// Create a new palette for the given base color. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(base: Rgb) -> Self {
        Self::new(base)
    }

    /// Parse the base color and create a new palette. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Get the base color. <i class=python-only>Python only!</i>
    #[getter(base)]
    pub fn py_base(&self) -> Rgb {
        self.base
    }

    /// Get the palette's entries as hashed hexadecimal strings. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> Vec<String> {
        self.to_hex().to_vec()
    }

    /// Get the number of entries, which is 7. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        Self::COUNT
    }

    /// Get the entry at the given index. <i class=python-only>Python only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<Rgb> {
        let count = Self::COUNT as isize;
        match index {
            i if -count <= i && i < 0 => Ok(self.entries[(count + i) as usize]),
            i if 0 <= i && i < count => Ok(self.entries[i as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid palette index",
            )),
        }
    }

    pub fn __repr__(&self) -> String {
        format!("Palette({})", self.base)
    }

    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Palette {
    /// The number of entries in a palette.
    pub const COUNT: usize = 7;

    /// The lightness offset between adjacent entries in percentage points.
    pub const STEP: i16 = 10;

    /// The lightness shifts applied to the base color, in palette order.
    pub const OFFSETS: [i16; Palette::COUNT] = [-3, -2, -1, 0, 1, 2, 3];

    /// Create a new palette for the given base color.
    pub fn new(base: Rgb) -> Self {
        let hsl = base.to_hsl();
        let entries = Self::OFFSETS.map(|offset| hsl.shift_lightness(offset * Self::STEP).to_rgb());
        Self { base, entries }
    }

    /// Get the base color.
    pub const fn base(&self) -> Rgb {
        self.base
    }

    /// Get the middle entry.
    ///
    /// This entry has the same HSL coordinates as the base color, up to
    /// rounding, and hence may differ from the base color by a few units per
    /// channel.
    pub const fn middle(&self) -> Rgb {
        self.entries[Self::COUNT / 2]
    }

    /// Get the number of entries.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        Self::COUNT
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, Rgb> {
        self.entries.iter()
    }

    /// Get the entries in six digit hashed hexadecimal notation.
    pub fn to_hex(&self) -> [String; Palette::COUNT] {
        self.entries.map(|entry| entry.to_string())
    }
}

impl AsRef<[Rgb; Palette::COUNT]> for Palette {
    fn as_ref(&self) -> &[Rgb; Palette::COUNT] {
        &self.entries
    }
}

impl core::ops::Index<usize> for Palette {
    type Output = Rgb;

    /// Access the entry with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `Palette::COUNT <= index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = core::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Rgb> for Palette {
    fn from(value: Rgb) -> Self {
        Self::new(value)
    }
}

impl core::str::FromStr for Palette {
    type Err = ColorFormatError;

    /// Parse the base color in hashed hexadecimal notation and create its
    /// palette.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rgb>().map(Self::new)
    }
}

impl core::fmt::Display for Palette {
    /// Format the entries in hashed hexadecimal notation, separated by
    /// spaces.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if 0 < index {
                f.write_str(" ")?;
            }
            <Rgb as core::fmt::Display>::fmt(entry, f)?;
        }
        Ok(())
    }
}

// ====================================================================================================================

/// Generate the palette for a base color in hashed hexadecimal notation.
///
/// The result has [`Palette::COUNT`] colors in six digit hashed hexadecimal
/// notation, ordered from darkest to lightest. The middle entry is the base
/// color's round trip through HSL.
///
/// ```
/// # use tintshade::{generate_palette, hex_to_hsl, hsl_to_hex, ColorFormatError, Float};
/// let palette = generate_palette("#3498db")?;
/// let (h, s, l) = hex_to_hsl("#3498db")?.components();
/// assert_eq!(palette[3], hsl_to_hex(Float::from(h), Float::from(s), Float::from(l)));
///
/// assert_eq!(generate_palette("#3498dbff"), Err(ColorFormatError::UnexpectedCharacters));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn generate_palette(hex: &str) -> Result<[String; Palette::COUNT], ColorFormatError> {
    hex.parse::<Palette>().map(|palette| palette.to_hex())
}

// ====================================================================================================================
