// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog command: list the spinner glyph sets.

use std::io::Write;

use termcolor::{StandardStream, WriteColor};

use verbose::error::ExitCode;
use verbose::spinner::{GLYPHS, frames};
use verbose::term::{resolve_color, scheme};

/// Run the catalog command.
pub fn run() -> anyhow::Result<ExitCode> {
    let mut stdout = StandardStream::stdout(resolve_color());

    stdout.set_color(&scheme::header())?;
    write!(stdout, "Spinner glyph sets")?;
    stdout.reset()?;
    writeln!(stdout)?;

    for kind in 0..GLYPHS.len() {
        let glyphs: Vec<String> = frames(kind).iter().map(char::to_string).collect();
        stdout.set_color(&scheme::index())?;
        write!(stdout, "{:>2}", kind)?;
        stdout.set_color(&scheme::plain())?;
        writeln!(stdout, " - {}", glyphs.join(" "))?;
    }
    stdout.reset()?;

    Ok(ExitCode::Success)
}
