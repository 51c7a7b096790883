// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error-conditional print helpers.
//!
//! ```ignore
//! let result = load(path);
//! if verb.err(result.as_ref().err(), "loading settings", false) {
//!     return;
//! }
//! ```

use std::fmt::Display;
use std::panic::Location;

use crate::emitter::Verb;

/// Status used when a helper is asked to terminate the process.
pub const EXIT_STATUS: i32 = 1;

impl Verb<'_> {
    /// Report `err` whenever it is present, regardless of `enabled`.
    ///
    /// The report names the calling line and the line that called the
    /// caller. With `exit` set the process terminates after the report is
    /// written. Returns whether an error was present.
    #[track_caller]
    pub fn err_out<E: Display + ?Sized>(&mut self, err: Option<&E>, msg: &str, exit: bool) -> bool {
        let Some(err) = err else {
            return false;
        };

        let location = Location::caller();
        let report = self.error_report(location, err, msg);

        let was_enabled = self.enabled;
        self.enabled = true;
        let line = self.compose(location, &report);
        self.write_line(&line);
        self.enabled = was_enabled;

        if exit {
            self.flush();
            tracing::debug!("exiting after reported error at {}", location);
            std::process::exit(EXIT_STATUS);
        }
        true
    }

    /// Report `err` only when `enabled`; otherwise just say whether one
    /// was present.
    #[track_caller]
    pub fn err<E: Display + ?Sized>(&mut self, err: Option<&E>, msg: &str, exit: bool) -> bool {
        if self.enabled {
            return self.err_out(err, msg, exit);
        }
        err.is_some()
    }

    /// The two-level report text for one error.
    fn error_report<E: Display + ?Sized>(
        &self,
        location: &'static Location<'static>,
        err: &E,
        msg: &str,
    ) -> String {
        let inner = self.resolver.resolve(location);
        let outer = self.resolver.resolve_outer(location);
        format!(
            "error: {} -- {}\n\tfile: {} line: {}\n\tfile: {} line: {}\n",
            msg, err, inner.file, inner.line, outer.file, outer.line
        )
    }
}

#[cfg(test)]
#[path = "iferr_tests.rs"]
mod tests;
