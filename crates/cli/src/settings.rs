// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file parsing.
//!
//! An optional `verbose.toml` preconfigures the emitter and spinner:
//!
//! ```toml
//! [emitter]
//! enabled = true
//! date = "%Y-%m-%d %T"
//! delimiter = "|"
//! print_line = true
//! output = "stderr"
//!
//! [spinner]
//! label = "Loading:"
//! kind = 13
//! speed = 12
//! target = "stdout"
//! ```
//!
//! Command-line flags override file values.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emitter::{DatePattern, Verb};
use crate::error::{Error, Result};
use crate::spinner::{DEFAULT_SPEED, SPIN_LABEL};
use crate::term::Target;

/// Full settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub emitter: EmitterSettings,

    #[serde(default)]
    pub spinner: SpinnerSettings,
}

/// `[emitter]` table.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitterSettings {
    /// Start with output enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Date pattern: `"default"`, a `date(1)` pattern, or absent for none.
    pub date: Option<String>,

    /// Separator between prefix segments.
    pub delimiter: Option<String>,

    /// Override whether dates are printed.
    pub print_date: Option<bool>,

    /// Tag lines with `file:line`.
    #[serde(default)]
    pub print_line: bool,

    /// `stdout`, `stderr`, or a file path (appended to).
    pub output: Option<String>,
}

/// `[spinner]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerSettings {
    pub label: String,
    pub kind: usize,
    pub speed: u32,
    pub target: Target,
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        Self {
            label: SPIN_LABEL.to_string(),
            kind: 0,
            speed: DEFAULT_SPEED,
            target: Target::Stderr,
        }
    }
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("loaded settings from {}", path.display());
        Self::parse(&content, path)
    }

    /// Parse settings from TOML content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            message: e.to_string(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Build an emitter from the `[emitter]` table.
    pub fn build_verb(&self) -> Result<Verb<'static>> {
        let destination = match self.emitter.output.as_deref() {
            Some(value) => Destination::parse(value),
            None => Destination::Stdout,
        };
        self.emitter.build_verb(destination.open()?)
    }
}

impl EmitterSettings {
    /// Build an emitter writing to `out`.
    pub fn build_verb<'w>(&self, out: impl Write + Send + 'w) -> Result<Verb<'w>> {
        let mut verb = Verb::new(out, DatePattern::from_arg(self.date.as_deref()))?;
        verb.enabled = self.enabled;
        verb.print_line = self.print_line;
        if let Some(print_date) = self.print_date {
            verb.print_date = print_date;
        }
        if let Some(delimiter) = &self.delimiter {
            verb.delimiter = delimiter.clone();
        }
        Ok(verb)
    }
}

/// Where emitter output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Destination {
    pub fn parse(value: &str) -> Self {
        match value {
            "stdout" | "-" => Destination::Stdout,
            "stderr" => Destination::Stderr,
            path => Destination::File(PathBuf::from(path)),
        }
    }

    /// Open the destination. Files are created if needed and appended to.
    pub fn open(&self) -> Result<Box<dyn Write + Send>> {
        match self {
            Destination::Stdout => Ok(Box::new(io::stdout())),
            Destination::Stderr => Ok(Box::new(io::stderr())),
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| Error::Io {
                        path: path.clone(),
                        source: e,
                    })?;
                Ok(Box::new(file))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Destination::Stdout => "stdout".to_string(),
            Destination::Stderr => "stderr".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
