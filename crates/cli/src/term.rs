// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal capability probing and styling.
//!
//! A stream counts as interactive when it is a TTY and `TERM` is not
//! `dumb`. Color for the demo output is resolved separately:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default: color only when stdout is interactive

use std::io::{self, IsTerminal, Write};

use serde::Deserialize;
use termcolor::ColorChoice;

/// Whether `stream` can show in-place redraws.
pub fn is_interactive<T: IsTerminal>(stream: &T) -> bool {
    stream.is_terminal() && !is_dumb_terminal()
}

fn is_dumb_terminal() -> bool {
    std::env::var("TERM").is_ok_and(|term| term == "dumb")
}

/// A standard output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

impl Target {
    pub fn is_interactive(self) -> bool {
        match self {
            Target::Stdout => is_interactive(&io::stdout()),
            Target::Stderr => is_interactive(&io::stderr()),
        }
    }

    pub fn writer(self) -> Box<dyn Write + Send> {
        match self {
            Target::Stdout => Box::new(io::stdout()),
            Target::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !is_interactive(&io::stdout()) {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for demo output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold cyan section header.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        spec
    }

    /// Yellow catalog index.
    pub fn index() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Red error marker.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Default (no color) for plain text.
    pub fn plain() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "term_tests.rs"]
mod tests;
