#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{hsl_to_rgb, to_24bit};
use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::{Float, Rgb};

/// A color in the HSL color model with whole-numbered coordinates.
///
/// The hue is an angle on the color wheel in degrees `0..=359`, whereas
/// saturation and lightness are percentages `0..=100`. Grays have hue and
/// saturation zero.
///
/// # Examples
///
/// [`Hsl::new`] validates the three coordinates. [`Rgb::to_hsl`] and
/// [`hex_to_hsl`] produce HSL colors from RGB colors, rounding each coordinate
/// to the nearest whole number.
///
/// ```
/// # use tintshade::{hex_to_hsl, Hsl};
/// let blue = hex_to_hsl("#3498db")?;
/// assert_eq!(blue.components(), (204, 70, 53));
/// assert_eq!(blue.to_string(), "hsl(204, 70%, 53%)");
///
/// assert!(Hsl::new(360, 50, 50).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #3498db;"></div>
/// </div>
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "tintshade"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hsl {
    /// Create a new HSL color. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(hue: u16, saturation: u8, lightness: u8) -> Result<Self, OutOfBoundsError> {
        Self::new(hue, saturation, lightness)
    }

    /// Get the hue. <i class=python-only>Python only!</i>
    #[getter(hue)]
    pub fn py_hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation. <i class=python-only>Python only!</i>
    #[getter(saturation)]
    pub fn py_saturation(&self) -> u8 {
        self.saturation
    }

    /// Get the lightness. <i class=python-only>Python only!</i>
    #[getter(lightness)]
    pub fn py_lightness(&self) -> u8 {
        self.lightness
    }

    /// Convert this HSL color to a true color. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> Rgb {
        self.to_rgb()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "Hsl({}, {}, {})",
            self.hue, self.saturation, self.lightness
        )
    }

    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Hsl {
    /// The range of valid hues.
    pub const HUE: core::ops::RangeInclusive<usize> = 0..=359;

    /// The range of valid saturation and lightness values.
    pub const PERCENT: core::ops::RangeInclusive<usize> = 0..=100;

    /// Create a new HSL color.
    ///
    /// This function returns an out-of-bounds error if the hue is 360 or more
    /// or if saturation or lightness exceed 100.
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Result<Self, OutOfBoundsError> {
        if !Self::HUE.contains(&usize::from(hue)) {
            return Err(OutOfBoundsError::new(hue, Self::HUE));
        }
        for value in [saturation, lightness] {
            if !Self::PERCENT.contains(&usize::from(value)) {
                return Err(OutOfBoundsError::new(value, Self::PERCENT));
            }
        }

        Ok(Self::new_unchecked(hue, saturation, lightness))
    }

    /// Create a new HSL color from known-good coordinates.
    pub(crate) const fn new_unchecked(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation in percent.
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Get the lightness in percent.
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Get hue, saturation, and lightness as a triple.
    pub const fn components(&self) -> (u16, u8, u8) {
        (self.hue, self.saturation, self.lightness)
    }

    /// Determine whether this color is a gray.
    pub const fn is_achromatic(&self) -> bool {
        self.saturation == 0
    }

    /// Shift the lightness by the given number of percentage points.
    ///
    /// The resulting lightness is clamped to `0..=100`. Hue and saturation
    /// stay the same.
    ///
    /// ```
    /// # use tintshade::Hsl;
    /// let hsl = Hsl::new(204, 70, 83)?;
    /// assert_eq!(hsl.shift_lightness(10).lightness(), 93);
    /// assert_eq!(hsl.shift_lightness(20).lightness(), 100);
    /// assert_eq!(hsl.shift_lightness(-90).lightness(), 0);
    /// # Ok::<(), tintshade::OutOfBoundsError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn shift_lightness(&self, delta: i16) -> Self {
        let lightness = i16::from(self.lightness).saturating_add(delta).clamp(0, 100);
        Self::new_unchecked(self.hue, self.saturation, lightness as u8)
    }

    /// Convert this HSL color to a true color.
    pub fn to_rgb(&self) -> Rgb {
        let (h, s, l) = self.components();
        Rgb::from(to_24bit(&hsl_to_rgb(&[
            Float::from(h),
            Float::from(s),
            Float::from(l),
        ])))
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

impl From<Hsl> for (u16, u8, u8) {
    fn from(value: Hsl) -> Self {
        value.components()
    }
}

impl TryFrom<(u16, u8, u8)> for Hsl {
    type Error = OutOfBoundsError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        let (h, s, l) = value;
        Self::new(h, s, l)
    }
}

impl core::str::FromStr for Hsl {
    type Err = ColorFormatError;

    /// Parse a color in hashed hexadecimal notation and convert it to HSL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_hsl(s)
    }
}

impl core::fmt::Display for Hsl {
    /// Format this color with CSS's legacy `hsl()` syntax.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        ))
    }
}

// ====================================================================================================================

/// Convert a color in hashed hexadecimal notation to HSL.
///
/// The color must be `#` followed by three or six hexadecimal digits, after
/// trimming surrounding white space. Malformed colors result in a
/// [`ColorFormatError`] instead of a made-up color.
///
/// ```
/// # use tintshade::{hex_to_hsl, ColorFormatError};
/// assert_eq!(hex_to_hsl("#3af")?, hex_to_hsl("#33aaff")?);
/// assert_eq!(hex_to_hsl("#808080")?.components(), (0, 0, 50));
/// assert_eq!(hex_to_hsl("#3498d"), Err(ColorFormatError::UnexpectedCharacters));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorFormatError> {
    hex.parse::<Rgb>().map(|rgb| rgb.to_hsl())
}

/// Convert the HSL coordinates to a color in six digit hashed hexadecimal
/// notation.
///
/// The hue is in degrees and saturation as well as lightness are in percent.
/// Unlike [`Hsl`], this function accepts fractional and out-of-range
/// coordinates. Channels are clamped to `0x00..=0xff`, so saturation or
/// lightness out of range saturate towards black or white. A hue outside
/// `0..360` is not wrapped around. It contributes no chroma, so the result is
/// a gray. That gray is shifted towards black by half the chroma the hue would
/// have had, which makes it black at full saturation and 50% lightness.
///
/// ```
/// # use tintshade::hsl_to_hex;
/// assert_eq!(hsl_to_hex(204.0, 70.0, 53.0), "#3398db");
/// assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
/// assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#000000");
/// assert_eq!(hsl_to_hex(360.0, 50.0, 50.0), "#404040");
/// assert_eq!(hsl_to_hex(0.0, 100.0, 150.0), "#ffffff");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_hex(h: Float, s: Float, l: Float) -> String {
    Rgb::from(to_24bit(&hsl_to_rgb(&[h, s, l]))).to_string()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hex_to_hsl, hsl_to_hex, Hsl};
    use crate::error::{ColorFormatError, OutOfBoundsError};
    use crate::{Float, Rgb};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_new() -> Result<(), OutOfBoundsError> {
        assert_eq!(Hsl::new(359, 100, 100)?.components(), (359, 100, 100));
        assert_eq!(
            Hsl::new(360, 50, 50),
            Err(OutOfBoundsError::new(360_u16, 0..=359))
        );
        assert_eq!(
            Hsl::new(0, 101, 50),
            Err(OutOfBoundsError::new(101_u8, 0..=100))
        );
        assert_eq!(
            Hsl::new(0, 50, 255),
            Err(OutOfBoundsError::new(255_u8, 0..=100))
        );
        assert_eq!(Hsl::try_from((120, 100, 25))?.to_rgb(), Rgb::new(0, 0x80, 0));
        Ok(())
    }

    #[test]
    fn test_hex_to_hsl() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_hsl("#3498db")?.components(), (204, 70, 53));
        assert_eq!(hex_to_hsl("#e74c3c")?.components(), (6, 78, 57));
        assert_eq!(hex_to_hsl("#2ecc71")?.components(), (145, 63, 49));
        assert_eq!(hex_to_hsl("#3af")?, hex_to_hsl("#33aaff")?);
        assert_eq!(hex_to_hsl("#3af")?.components(), (205, 100, 60));
        assert_eq!("#ffffff".parse::<Hsl>()?.components(), (0, 0, 100));
        Ok(())
    }

    #[test]
    fn test_hex_to_hsl_errors() {
        assert_eq!(hex_to_hsl("3498db"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(hex_to_hsl(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            hex_to_hsl("#3498d"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            hex_to_hsl("#3498db80"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(hex_to_hsl("#34g8db"), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(204.0, 70.0, 53.0), "#3398db");
        assert_eq!(hsl_to_hex(204.4, 70.0, 53.0), "#3397db");
        assert_eq!(hsl_to_hex(90.0, 100.0, 50.0), "#80ff00");
        assert_eq!(hsl_to_hex(200.0, 50.0, 50.0), "#4095bf");
        assert_eq!(hsl_to_hex(350.0, 80.0, 30.0), "#8a0f24");
        assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
        assert_eq!(hsl_to_hex(0.0, 100.0, -20.0), "#000000");
        assert_eq!(hsl_to_hex(-10.0, 100.0, 50.0), "#000000");
        assert_eq!(hsl_to_hex(Float::NAN, 100.0, 50.0), "#000000");
        assert_eq!(hsl_to_hex(-10.0, 50.0, 50.0), "#404040");
        assert_eq!(hsl_to_hex(Float::INFINITY, 50.0, 50.0), "#404040");
    }

    #[test]
    fn test_shift_lightness() -> Result<(), OutOfBoundsError> {
        let hsl = Hsl::new(6, 78, 57)?;
        assert_eq!(hsl.shift_lightness(-30).components(), (6, 78, 27));
        assert_eq!(hsl.shift_lightness(50).components(), (6, 78, 100));
        assert_eq!(hsl.shift_lightness(i16::MIN).components(), (6, 78, 0));
        assert_eq!(hsl.shift_lightness(i16::MAX).components(), (6, 78, 100));
        Ok(())
    }

    #[test]
    fn test_round_trip() {
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(0xff, 0xff, 0xff),
            Rgb::new(0xff, 0, 0),
            Rgb::new(0, 0xff, 0),
            Rgb::new(0, 0, 0xff),
            Rgb::new(0xff, 0xff, 0),
            Rgb::new(0, 0xff, 0xff),
            Rgb::new(0xff, 0, 0xff),
        ] {
            assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        }

        // The largest loss across all 24-bit colors.
        let worst = Rgb::new(0x02, 0xe4, 0xe6);
        assert_eq!(worst.to_hsl().to_rgb(), Rgb::new(0x02, 0xdf, 0xe3));
        crate::assert_close_rgb!(worst, worst.to_hsl().to_rgb(), 5);

        for r in (0..=255_u8).step_by(17) {
            for g in (0..=255_u8).step_by(17) {
                for b in (0..=255_u8).step_by(17) {
                    let rgb = Rgb::new(r, g, b);
                    crate::assert_close_rgb!(rgb, rgb.to_hsl().to_rgb(), 3);
                }
            }
        }

        let mut rng = StdRng::seed_from_u64(0xe74c3c);
        for _ in 0..10_000 {
            let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
            crate::assert_close_rgb!(rgb, rgb.to_hsl().to_rgb(), 5);
        }
    }

    #[test]
    fn test_display() -> Result<(), OutOfBoundsError> {
        assert_eq!(Hsl::new(145, 63, 49)?.to_string(), "hsl(145, 63%, 49%)");
        Ok(())
    }
}
