/// # swatches: Tints and Shades in the Terminal
///
/// This example generates the palette for each base color given on the command
/// line and writes the palette as a row of color swatches to the terminal.
/// Without base colors, it uses `#3498db`. The `-v` option enables diagnostic
/// output and `-vv` makes that output detailed.
use std::io::{Error, ErrorKind};

use prettytty::err::report;
use prettytty::opt::{Options, Volume};
use prettytty::Connection;
use tintshade::render::{render, RenderOptions};
use tintshade::{Palette, PaletteState};

fn run() -> std::io::Result<()> {
    // Parse the command line
    let mut volume = Volume::Silent;
    let mut bases = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => volume = Volume::Regular,
            "-vv" => volume = Volume::Detailed,
            _ => bases.push(arg),
        }
    }

    let mut state = PaletteState::default();
    if bases.is_empty() {
        bases.push(state.base().to_string());
    }

    // Access the terminal
    let options = Options::builder().volume(volume).build();
    let tty = Connection::with_options(options)?;
    let mut output = tty.output();

    let render_options = RenderOptions::builder().volume(volume).build();
    for base in bases {
        state.set_base(base);
        let palette: Palette = *state
            .generate()
            .map_err(|error| Error::new(ErrorKind::InvalidInput, error))?;

        output.print("\r\n")?;
        render(&palette, &render_options, &mut output)?;
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        report(&error);
    }
}
