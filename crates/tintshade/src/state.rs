//! Utility module with the state of a palette picker.

use crate::error::ColorFormatError;
use crate::{Palette, Rgb};

/// The state of a palette picker.
///
/// A presentation layer offering a color picker or text field for the base
/// color owns one palette state. It records the base color as entered by the
/// user with [`PaletteState::set_base`] and regenerates the palette on demand
/// with [`PaletteState::generate`]. The palette only changes on successful
/// generation. It is replaced as a whole and never merged with the previous
/// palette.
///
/// # Examples
///
/// ```
/// # use tintshade::{ColorFormatError, PaletteState};
/// let mut state = PaletteState::default();
/// assert_eq!(state.base(), "#3498db");
///
/// state.set_base("#e74c3c");
/// assert!(state.is_stale());
/// assert_eq!(state.generate()?.middle().to_string(), "#e74d3c");
///
/// state.set_base("#e74c3");
/// assert_eq!(state.generate(), Err(ColorFormatError::UnexpectedCharacters));
/// assert_eq!(state.palette().middle().to_string(), "#e74d3c");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteState {
    base: String,
    palette: Palette,
}

impl PaletteState {
    /// The base color of the default palette state.
    pub const DEFAULT_BASE: Rgb = Rgb::new(0x34, 0x98, 0xdb);

    /// Create a new palette state for the given base color.
    pub fn new<S: Into<String>>(base: S) -> Result<Self, ColorFormatError> {
        let base = base.into();
        let palette = base.parse()?;
        Ok(Self { base, palette })
    }

    /// Get the base color as entered.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Update the base color.
    ///
    /// This method does not validate the base color and does not regenerate
    /// the palette.
    pub fn set_base<S: Into<String>>(&mut self, base: S) {
        self.base = base.into();
    }

    /// Get the current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Determine whether the base color has changed since the palette was
    /// last generated.
    ///
    /// Base colors that fail to parse always are stale.
    pub fn is_stale(&self) -> bool {
        !self
            .base
            .parse::<Rgb>()
            .is_ok_and(|base| base == self.palette.base())
    }

    /// Generate the palette for the current base color.
    ///
    /// If the base color is malformed, this method returns the error and
    /// leaves the current palette unchanged.
    pub fn generate(&mut self) -> Result<&Palette, ColorFormatError> {
        self.palette = self.base.parse()?;
        Ok(&self.palette)
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        let base = Self::DEFAULT_BASE;
        Self {
            base: base.to_string(),
            palette: Palette::new(base),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::PaletteState;
    use crate::error::ColorFormatError;
    use crate::{Palette, Rgb};

    #[test]
    fn test_default() {
        let state = PaletteState::default();
        assert_eq!(state.base(), "#3498db");
        assert_eq!(state.palette(), &Palette::new(Rgb::new(0x34, 0x98, 0xdb)));
        assert!(!state.is_stale());
    }

    #[test]
    fn test_new() -> Result<(), ColorFormatError> {
        let state = PaletteState::new("#3AF")?;
        assert_eq!(state.base(), "#3AF");
        assert_eq!(state.palette().base(), Rgb::new(0x33, 0xaa, 0xff));
        assert!(!state.is_stale());

        assert_eq!(
            PaletteState::new("#3a"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }

    #[test]
    fn test_generate() -> Result<(), ColorFormatError> {
        let mut state = PaletteState::default();
        let previous = *state.palette();

        state.set_base("#2ecc71");
        assert!(state.is_stale());
        assert_eq!(state.palette(), &previous);

        let palette = *state.generate()?;
        assert_ne!(palette, previous);
        assert_eq!(palette.base(), Rgb::new(0x2e, 0xcc, 0x71));
        assert!(!state.is_stale());

        // Regenerating is idempotent.
        assert_eq!(state.generate()?, &palette);
        Ok(())
    }

    #[test]
    fn test_generate_error_keeps_palette() -> Result<(), ColorFormatError> {
        let mut state = PaletteState::new("#e74c3c")?;
        let previous = *state.palette();

        for malformed in ["", "e74c3c", "#e74c3", "#e74c3g"] {
            state.set_base(malformed);
            assert!(state.generate().is_err());
            assert!(state.is_stale());
            assert_eq!(state.palette(), &previous);
            assert_eq!(state.base(), malformed);
        }
        Ok(())
    }
}
