#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{format, from_24bit, parse, rgb_to_hsl, round_hsl};
use crate::error::ColorFormatError;
use crate::Hsl;

/// A "true," 24-bit RGB color.
///
/// # Examples
///
/// Rust code can create a new true color with either [`Rgb::new`] or by
/// parsing a string in hashed hexadecimal notation. Both the three and six
/// digit forms are supported. Digits may be upper- or lowercase.
///
/// ```
/// # use tintshade::{ColorFormatError, Rgb};
/// let blue: Rgb = "#3498db".parse()?;
/// assert_eq!(blue, Rgb::new(0x34, 0x98, 0xdb));
///
/// let sky: Rgb = "#3AF".parse()?;
/// assert_eq!(sky, Rgb::new(0x33, 0xaa, 0xff));
/// # Ok::<(), ColorFormatError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #3498db;"></div>
/// <div style="background-color: #33aaff;"></div>
/// </div>
/// <br>
///
/// It can access the coordinates with [`Rgb as AsRef<[u8;
/// 3]>`](struct.Rgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Rgb) or
/// with [`Rgb as
/// Index<usize>`](struct.Rgb.html#impl-Index%3Cusize%3E-for-Rgb).
/// ```
/// # use tintshade::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// ```
///
/// Finally, it converts to [`Hsl`] and formats in six digit hashed
/// hexadecimal notation with [`Rgb as
/// Display`](struct.Rgb.html#impl-Display-for-Rgb).
/// ```
/// # use tintshade::{Hsl, Rgb};
/// let sand = Rgb::new(0xee, 0xdc, 0xad);
/// assert_eq!(sand.to_hsl(), Hsl::new(43, 66, 81)?);
/// assert_eq!(format!("{}", sand), "#eedcad");
/// # Ok::<(), tintshade::OutOfBoundsError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "tintshade")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new true color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub const fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a color in hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Access this true color's coordinates. <i class=python-only>Python
    /// only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this true color to HSL. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> Hsl {
        self.to_hsl()
    }

    /// Get this true color's length, which is 3. <i
    /// class=python-only>Python only!</i>
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this true color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this true color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Rgb {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Convert this true color to HSL.
    ///
    /// The hue is rounded to whole degrees, saturation and lightness to whole
    /// percent. Grays have hue and saturation zero.
    pub fn to_hsl(&self) -> Hsl {
        let [r, g, b] = self.0;
        let (h, s, l) = round_hsl(&rgb_to_hsl(&from_24bit(r, g, b)));
        Hsl::new_unchecked(h, s, l)
    }

    /// Determine whether this true color is a gray, i.e., has three equal
    /// coordinates.
    pub fn is_achromatic(&self) -> bool {
        let [r, g, b] = self.0;
        r == g && g == b
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

impl core::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a color in three or six digit hashed hexadecimal notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(&self.0, f)
    }
}

// ====================================================================================================================
