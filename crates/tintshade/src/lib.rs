//! # Tint & Shade
//!
//! Tintshade derives a palette of tints and shades from a single base color.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature to also document the Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Tintshade's main abstractions are:
//!
//!   * [`Rgb`] implements **24-bit colors**, which parse from and format as
//!     hashed hexadecimal strings such as `#3498db` or `#3af`.
//!   * [`Hsl`] implements **hue, saturation, and lightness** with whole
//!     degrees and percent, which is the color space for deriving tints and
//!     shades.
//!   * [`Palette`] implements **palettes of seven colors**, ranging from
//!     three shades over the base color to three tints. Each step shifts the
//!     lightness by ten percentage points.
//!   * [`PaletteState`] tracks the base color entered by a user together with
//!     the most recently generated palette.
#![cfg_attr(
    feature = "tty",
    doc = "  * The optional [`render`] module writes palettes as **color swatches**
    to terminals."
)]
#![cfg_attr(
    not(feature = "tty"),
    doc = "  * The optional `render` module writes palettes as **color swatches**
    to terminals."
)]
//!
//! The free functions [`hex_to_hsl`], [`hsl_to_hex`], and [`generate_palette`]
//! provide the same functionality on strings and numbers:
//!
//! ```
//! # use tintshade::{generate_palette, hex_to_hsl, hsl_to_hex, ColorFormatError};
//! assert_eq!(hex_to_hsl("#3498db")?.components(), (204, 70, 53));
//! assert_eq!(hsl_to_hex(204.0, 70.0, 53.0), "#3398db");
//! assert_eq!(
//!     generate_palette("#3498db")?,
//!     ["#124364", "#19608f", "#217dba", "#3398db", "#5faee3", "#8ac4ea", "#b5daf2"]
//! );
//! # Ok::<(), ColorFormatError>(())
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #124364;"></div>
//! <div style="background-color: #19608f;"></div>
//! <div style="background-color: #217dba;"></div>
//! <div style="background-color: #3398db;"></div>
//! <div style="background-color: #5faee3;"></div>
//! <div style="background-color: #8ac4ea;"></div>
//! <div style="background-color: #b5daf2;"></div>
//! </div>
//!
//! Since HSL coordinates are rounded to whole numbers, the middle entry need
//! not be the same as the base color. Per channel, the two differ by at most
//! five units.
//!
//! Malformed colors are errors, not black:
//!
//! ```
//! # use tintshade::{hex_to_hsl, ColorFormatError};
//! assert_eq!(hex_to_hsl("3498db"), Err(ColorFormatError::UnknownFormat));
//! assert_eq!(hex_to_hsl("#3498d"), Err(ColorFormatError::UnexpectedCharacters));
//! assert_eq!(hex_to_hsl("#34g8db"), Err(ColorFormatError::MalformedHex));
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Tintshade supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`tty`** controls the `render` module and its implementation with the
//!     [prettytty](https://crates.io/crates/prettytty) terminal crate. This
//!     feature is disabled by default.
//!   - **`pyffi`** controls tintshade's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
mod hsl;
mod palette;
mod rgb;
pub mod state;

#[cfg(feature = "tty")]
pub mod render;

#[doc(hidden)]
pub use core::channel_distance;

pub use error::{ColorFormatError, OutOfBoundsError};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use palette::{generate_palette, Palette};
pub use rgb::Rgb;
pub use state::PaletteState;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tintshade(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(hex_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(generate_palette, m)?)?;

    m.add_class::<Hsl>()?;
    m.add_class::<Palette>()?;
    m.add_class::<Rgb>()?;

    Ok(())
}
