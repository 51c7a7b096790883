// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call-site resolution.
//!
//! The emitter tags lines with the location of the code that called it.
//! Locations come from `#[track_caller]`; the one-level-up location used by
//! the error helpers comes from a captured backtrace when debug info allows.
//! Resolution sits behind [`CallerResolver`] so tests can count or fake it.
//!
//! The outer location needs line tables in the binary. A build with debug
//! info stripped reports it as `???:0`.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::path::{Component, Path, PathBuf};

/// Placeholder file name when a frame cannot be resolved.
pub const UNKNOWN_FILE: &str = "???";

/// A resolved source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The `???:0` site reported when nothing could be resolved.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }

    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE && self.line == 0
    }

    /// File name without its directories.
    pub fn basename(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// Short `file.rs:42` form used for line tags.
    pub fn tag(&self) -> String {
        format!("{}:{}", self.basename(), self.line)
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Resolves call sites for line tags and error reports.
pub trait CallerResolver: Send + Sync {
    /// The site that invoked the emitter.
    fn resolve(&self, location: &'static Location<'static>) -> CallSite;

    /// The site that called the function containing `location`.
    fn resolve_outer(&self, location: &'static Location<'static>) -> CallSite;
}

/// Default resolver backed by `#[track_caller]` and `std::backtrace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceResolver;

impl CallerResolver for SourceResolver {
    fn resolve(&self, location: &'static Location<'static>) -> CallSite {
        CallSite::from(location)
    }

    fn resolve_outer(&self, location: &'static Location<'static>) -> CallSite {
        let trace = Backtrace::force_capture().to_string();
        outer_frame(&trace, &CallSite::from(location)).unwrap_or_else(|| {
            tracing::trace!("no outer frame for {}", location);
            CallSite::unknown()
        })
    }
}

/// Resolver that never looks anything up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallSite;

impl CallerResolver for NoCallSite {
    fn resolve(&self, _location: &'static Location<'static>) -> CallSite {
        CallSite::unknown()
    }

    fn resolve_outer(&self, _location: &'static Location<'static>) -> CallSite {
        CallSite::unknown()
    }
}

/// Find the frame following `inner` in a rendered backtrace.
///
/// Frames are matched on line number and on path: `Location` paths are
/// relative to the workspace while backtraces print absolute or
/// crate-relative (`./src/...`) paths, so either may be a suffix of the
/// other.
pub fn outer_frame(trace: &str, inner: &CallSite) -> Option<CallSite> {
    let mut frames = trace.lines().filter_map(parse_frame_location);
    frames.find(|frame| frame.line == inner.line && same_source(&frame.file, &inner.file))?;
    frames.next()
}

/// Whether two renderings of a source path name the same file.
fn same_source(a: &str, b: &str) -> bool {
    let (a, b) = (normalized(a), normalized(b));
    if a.as_os_str().is_empty() || b.as_os_str().is_empty() {
        return false;
    }
    a.ends_with(&b) || b.ends_with(&a)
}

/// Drop `.` components so `./src/x.rs` compares as `src/x.rs`.
fn normalized(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Parse an `at path/to/file.rs:LINE:COL` backtrace line.
fn parse_frame_location(line: &str) -> Option<CallSite> {
    let location = line.trim_start().strip_prefix("at ")?;
    let mut parts = location.rsplitn(3, ':');
    let _column = parts.next()?;
    let line = parts.next()?.parse().ok()?;
    let file = parts.next()?;
    Some(CallSite::new(file, line))
}

#[cfg(test)]
#[path = "caller_tests.rs"]
mod tests;
