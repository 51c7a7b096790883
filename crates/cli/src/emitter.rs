// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional output emitter.
//!
//! A [`Verb`] is a channel of diagnostic output that stays silent until
//! `enabled` is set, typically straight from a `-v` flag:
//!
//! ```ignore
//! let mut verb = Verb::new(std::io::stderr(), DatePattern::Default)?;
//! verb.enabled = args.verbose;
//! vprintln!(verb, "database query:", query);
//! ```
//!
//! Every call re-reads the public fields, so toggling `enabled`,
//! `print_date` or `delimiter` mid-run affects the next line only.
//!
//! Concurrent calls against one shared destination are not serialized;
//! wrap the `Verb` in a lock if several threads emit through it.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

use serde::Serialize;

use crate::caller::{CallerResolver, SourceResolver};
use crate::error::Result;
use crate::spinner::{StopSignal, StopToken, stop_channel};
use crate::timefmt::DateTemplate;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = " ";

/// Sentinel pattern argument that selects the standard timestamp.
pub const DEFAULT_PATTERN: &str = "default";

/// How a new emitter should stamp its lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatePattern {
    /// No timestamp; the standard template is kept for later use.
    #[default]
    None,
    /// Standard `YYYY-MM-DD HH:MM:SS` timestamp.
    Default,
    /// A `date(1)` style pattern such as `%A %B %d %Y`.
    Custom(String),
}

impl DatePattern {
    /// Interpret a pattern argument the way the constructor's optional
    /// argument is interpreted: `"default"` and `""` select the standard
    /// timestamp, anything else is a custom pattern.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => DatePattern::None,
            Some(DEFAULT_PATTERN) | Some("") => DatePattern::Default,
            Some(pattern) => DatePattern::Custom(pattern.to_string()),
        }
    }
}

/// A toggleable diagnostic printer.
pub struct Verb<'w> {
    /// Master switch. When false every print call is a no-op.
    pub enabled: bool,
    /// Template used to render timestamps.
    pub date_format: DateTemplate,
    /// Separator between timestamp, line tag and payload.
    pub delimiter: String,
    /// Prefix lines with a timestamp.
    pub print_date: bool,
    /// Prefix lines with the caller's `file:line`.
    pub print_line: bool,
    out: Option<Box<dyn Write + Send + 'w>>,
    pub(crate) resolver: Arc<dyn CallerResolver>,
    pub(crate) stop: (StopSignal, StopToken),
}

impl Default for Verb<'_> {
    fn default() -> Self {
        Self {
            enabled: false,
            date_format: DateTemplate::default(),
            delimiter: String::new(),
            print_date: false,
            print_line: false,
            out: None,
            resolver: Arc::new(SourceResolver),
            stop: stop_channel(),
        }
    }
}

impl fmt::Debug for Verb<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verb")
            .field("enabled", &self.enabled)
            .field("date_format", &self.date_format)
            .field("delimiter", &self.delimiter)
            .field("print_date", &self.print_date)
            .field("print_line", &self.print_line)
            .field("has_output", &self.out.is_some())
            .finish_non_exhaustive()
    }
}

impl<'w> Verb<'w> {
    /// Create a disabled emitter writing to `out`.
    ///
    /// Fails only when a custom pattern cannot be translated.
    pub fn new(out: impl Write + Send + 'w, pattern: DatePattern) -> Result<Self> {
        let (date_format, print_date) = match pattern {
            DatePattern::None => (DateTemplate::standard(), false),
            DatePattern::Default => (DateTemplate::standard(), true),
            DatePattern::Custom(pattern) => (DateTemplate::from_pattern(&pattern)?, true),
        };
        Ok(Self {
            date_format,
            print_date,
            delimiter: DEFAULT_DELIMITER.to_string(),
            out: Some(Box::new(out)),
            ..Self::default()
        })
    }

    /// Replace the destination.
    pub fn set_output(&mut self, out: impl Write + Send + 'w) {
        self.out = Some(Box::new(out));
    }

    /// Replace the call-site resolver.
    pub fn set_resolver(&mut self, resolver: Arc<dyn CallerResolver>) {
        self.resolver = resolver;
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn CallerResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Print operands joined by spaces, no trailing newline.
    #[track_caller]
    pub fn print(&mut self, args: &[&dyn Display]) {
        if !self.enabled {
            return;
        }
        let line = self.compose(Location::caller(), &join(args));
        self.write_line(&line);
    }

    /// Print operands joined by spaces, followed by a newline.
    #[track_caller]
    pub fn println(&mut self, args: &[&dyn Display]) {
        if !self.enabled {
            return;
        }
        let mut payload = join(args);
        payload.push('\n');
        let line = self.compose(Location::caller(), &payload);
        self.write_line(&line);
    }

    /// Print pre-formatted arguments, usually from `format_args!`.
    #[track_caller]
    pub fn printf(&mut self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }
        let line = self.compose(Location::caller(), &fmt::format(args));
        self.write_line(&line);
    }

    /// Like [`Verb::print`] but to `w` instead of the configured output.
    #[track_caller]
    pub fn fprint(&self, w: &mut dyn Write, args: &[&dyn Display]) {
        if !self.enabled {
            return;
        }
        write_to(w, &self.compose(Location::caller(), &join(args)));
    }

    /// Like [`Verb::println`] but to `w` instead of the configured output.
    #[track_caller]
    pub fn fprintln(&self, w: &mut dyn Write, args: &[&dyn Display]) {
        if !self.enabled {
            return;
        }
        let mut payload = join(args);
        payload.push('\n');
        write_to(w, &self.compose(Location::caller(), &payload));
    }

    /// Like [`Verb::printf`] but to `w` instead of the configured output.
    #[track_caller]
    pub fn fprintf(&self, w: &mut dyn Write, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }
        write_to(w, &self.compose(Location::caller(), &fmt::format(args)));
    }

    /// Print `data` as two-space indented JSON.
    ///
    /// With `print_date` set, a bare timestamp line is written first even
    /// when the emitter is disabled. Serialization only happens when
    /// enabled; a failure is written as a diagnostic line, never returned.
    pub fn printj<T: Serialize + ?Sized>(&mut self, data: &T) {
        if self.print_date {
            let mut stamp = self.date_format.render_now();
            stamp.push('\n');
            self.write_line(&stamp);
        }
        if !self.enabled {
            return;
        }
        let text = match serde_json::to_string_pretty(data) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => format!("Error marshaling data: {}\n", e),
        };
        self.write_line(&text);
    }

    /// Timestamp, line tag and payload for one call.
    pub(crate) fn compose(&self, location: &'static Location<'static>, payload: &str) -> String {
        let delimiter = if self.delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            self.delimiter.as_str()
        };

        let mut line = String::with_capacity(payload.len() + 48);
        if self.print_date {
            line.push_str(&self.date_format.render_now());
            line.push_str(delimiter);
        }
        if self.print_line {
            line.push_str(&self.resolver.resolve(location).tag());
            line.push_str(delimiter);
        }
        line.push_str(payload);
        line
    }

    /// Write to the configured output, falling back to stdout.
    pub(crate) fn write_line(&mut self, text: &str) {
        let out = self.out.get_or_insert_with(|| Box::new(io::stdout()));
        write_to(out.as_mut(), text);
    }

    /// Flush the configured output, if any.
    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                tracing::warn!("verbose flush failed: {}", e);
            }
        }
    }
}

/// Space-join operands.
fn join(args: &[&dyn Display]) -> String {
    let mut joined = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(joined, "{}", arg);
    }
    joined
}

fn write_to(w: &mut dyn Write, text: &str) {
    if let Err(e) = w.write_all(text.as_bytes()).and_then(|()| w.flush()) {
        tracing::warn!("verbose write failed: {}", e);
    }
}

/// Conditionally print operands joined by spaces.
///
/// `vprint!(verb, "x", 42)` expands at the call site so line tags point
/// at the caller.
#[macro_export]
macro_rules! vprint {
    ($verb:expr $(, $arg:expr)* $(,)?) => {
        $verb.print(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Conditionally print operands joined by spaces plus a newline.
#[macro_export]
macro_rules! vprintln {
    ($verb:expr $(, $arg:expr)* $(,)?) => {
        $verb.println(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Conditionally print with `format!` syntax.
#[macro_export]
macro_rules! vprintf {
    ($verb:expr, $($fmt:tt)+) => {
        $verb.printf(::std::format_args!($($fmt)+))
    };
}

/// Conditionally print operands to an explicit writer.
#[macro_export]
macro_rules! vfprint {
    ($verb:expr, $w:expr $(, $arg:expr)* $(,)?) => {
        $verb.fprint($w, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Conditionally print operands plus a newline to an explicit writer.
#[macro_export]
macro_rules! vfprintln {
    ($verb:expr, $w:expr $(, $arg:expr)* $(,)?) => {
        $verb.fprintln($w, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Conditionally print with `format!` syntax to an explicit writer.
#[macro_export]
macro_rules! vfprintf {
    ($verb:expr, $w:expr, $($fmt:tt)+) => {
        $verb.fprintf($w, ::std::format_args!($($fmt)+))
    };
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
