//! Optional module rendering palettes as terminal swatches.
//!
//! Each palette entry becomes a swatch, that is, a block of spaces with the
//! entry as 24-bit background color, optionally followed by its hashed
//! hexadecimal label. The swatches use [`prettytty`]'s SGR commands and hence
//! can be written to a terminal connection's output as well as any other
//! writer.
//!
//!
//! # Example
//!
//! ```
//! # use tintshade::Palette;
//! # use tintshade::render::{render, RenderOptions};
//! let palette: Palette = "#3498db".parse()?;
//! let options = RenderOptions::builder()
//!     .swatch_width(2)
//!     .columns(4)
//!     .build();
//!
//! let mut buffer = Vec::new();
//! render(&palette, &options, &mut buffer)?;
//! assert!(buffer.starts_with(b"\x1b[48;2;18;67;100m  \x1b[m #124364"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{Result, Write};

use prettytty::cmd::{DynSetBackground24, ResetStyle};
use prettytty::opt::Volume;

use crate::{Palette, Rgb};

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    swatch_width: u8,
    columns: u8,
    labels: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            swatch_width: 6,
            columns: Palette::COUNT as u8,
            labels: true,
        }
    }
}

/// A builder of render options.
#[derive(Debug)]
pub struct RenderOptionBuilder(OptionData);

impl RenderOptionBuilder {
    /// Set the volume of diagnostic output.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the width of each swatch in columns.
    pub fn swatch_width(&mut self, width: u8) -> &mut Self {
        self.0.swatch_width = width;
        self
    }

    /// Set the number of swatches per line.
    ///
    /// This method ensures that there is at least one swatch per line.
    pub fn columns(&mut self, columns: u8) -> &mut Self {
        self.0.columns = columns.max(1);
        self
    }

    /// Set whether swatches are followed by their hexadecimal labels.
    pub fn labels(&mut self, labels: bool) -> &mut Self {
        self.0.labels = labels;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> RenderOptions {
        RenderOptions(self.0.clone())
    }
}

/// A render options object.
#[derive(Debug)]
pub struct RenderOptions(OptionData);

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions(OptionData::new())
    }
}

impl RenderOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> RenderOptionBuilder {
        RenderOptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular diagnostic output
    /// enabled.
    pub fn with_log() -> RenderOptions {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed diagnostic output
    /// enabled.
    pub fn with_detailed_log() -> RenderOptions {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether diagnostic output is enabled.
    pub fn verbose(&self) -> bool {
        !matches!(self.0.volume, Volume::Silent)
    }

    /// Get the swatch width.
    pub fn swatch_width(&self) -> u8 {
        self.0.swatch_width
    }

    /// Get the number of swatches per line.
    pub fn columns(&self) -> u8 {
        self.0.columns
    }

    /// Determine whether swatches are labelled.
    pub fn labels(&self) -> bool {
        self.0.labels
    }
}

// ====================================================================================================================

/// Write a single swatch.
fn write_swatch<W: Write>(entry: Rgb, options: &RenderOptions, out: &mut W) -> Result<()> {
    let [r, g, b] = *entry.as_ref();
    write!(
        out,
        "{}{:width$}{}",
        DynSetBackground24(r, g, b),
        "",
        ResetStyle,
        width = usize::from(options.swatch_width())
    )?;
    if options.labels() {
        write!(out, " {}", entry)?;
    }
    Ok(())
}

/// Render the palette as swatches.
///
/// This function writes the palette's entries in order, with
/// [`RenderOptions::columns`] swatches per line. Swatches on the same line are
/// separated by two spaces and every line, including the last one, ends with
/// `\r\n`, which works for terminals in cooked as well as raw mode.
///
/// If the options enable diagnostic output, this function first writes a
/// `palette::render` line with the base color and number of entries. With
/// detailed output, it also writes a `palette::swatch` line for every entry.
pub fn render<W: Write>(palette: &Palette, options: &RenderOptions, out: &mut W) -> Result<()> {
    if options.verbose() {
        write!(
            out,
            "palette::render base={} entries={}\r\n",
            palette.base(),
            palette.len()
        )?;
    }
    if matches!(options.volume(), Volume::Detailed) {
        for (index, entry) in palette.iter().enumerate() {
            write!(out, "palette::swatch index={} color={}\r\n", index, entry)?;
        }
    }

    let columns = usize::from(options.columns());
    for row in palette.as_ref().chunks(columns) {
        for (index, entry) in row.iter().enumerate() {
            if 0 < index {
                out.write_all(b"  ")?;
            }
            write_swatch(*entry, options, out)?;
        }
        out.write_all(b"\r\n")?;
    }

    out.flush()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{render, RenderOptions};
    use crate::{ColorFormatError, Palette, Rgb};
    use prettytty::opt::Volume;

    fn render_to_string(palette: &Palette, options: &RenderOptions) -> String {
        let mut buffer = Vec::new();
        let result = render(palette, options, &mut buffer);
        assert!(result.is_ok(), "rendering to a vector cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn test_options() {
        let options = RenderOptions::default();
        assert_eq!(options.swatch_width(), 6);
        assert_eq!(options.columns(), 7);
        assert!(options.labels());
        assert!(!options.verbose());

        let options = RenderOptions::builder().columns(0).labels(false).build();
        assert_eq!(options.columns(), 1);
        assert!(!options.labels());

        assert!(RenderOptions::with_log().verbose());
        assert_eq!(RenderOptions::with_detailed_log().volume(), Volume::Detailed);
    }

    #[test]
    fn test_render() -> Result<(), ColorFormatError> {
        let palette: Palette = "#808080".parse()?;
        let options = RenderOptions::builder().swatch_width(1).columns(4).build();

        assert_eq!(
            render_to_string(&palette, &options),
            concat!(
                "\x1b[48;2;51;51;51m \x1b[m #333333  ",
                "\x1b[48;2;77;77;77m \x1b[m #4d4d4d  ",
                "\x1b[48;2;102;102;102m \x1b[m #666666  ",
                "\x1b[48;2;128;128;128m \x1b[m #808080\r\n",
                "\x1b[48;2;153;153;153m \x1b[m #999999  ",
                "\x1b[48;2;179;179;179m \x1b[m #b3b3b3  ",
                "\x1b[48;2;204;204;204m \x1b[m #cccccc\r\n",
            )
        );
        Ok(())
    }

    #[test]
    fn test_render_without_labels() {
        let palette = Palette::new(Rgb::new(0, 0, 0));
        let options = RenderOptions::builder().swatch_width(3).labels(false).build();
        let output = render_to_string(&palette, &options);

        assert_eq!(output.matches("\x1b[48;2;0;0;0m   \x1b[m").count(), 4);
        assert!(!output.contains('#'));
        assert_eq!(output.matches("\r\n").count(), 1);
    }

    #[test]
    fn test_render_log() -> Result<(), ColorFormatError> {
        let palette: Palette = "#3498db".parse()?;

        let output = render_to_string(&palette, &RenderOptions::with_log());
        assert!(output.starts_with("palette::render base=#3498db entries=7\r\n"));
        assert!(!output.contains("palette::swatch"));

        let output = render_to_string(&palette, &RenderOptions::with_detailed_log());
        assert!(output.contains("palette::swatch index=0 color=#124364\r\n"));
        assert!(output.contains("palette::swatch index=6 color=#b5daf2\r\n"));
        Ok(())
    }
}
