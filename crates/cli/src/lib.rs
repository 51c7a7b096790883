// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional debug printing for command-line programs.
//!
//! A [`Verb`] prints only while [`Verb::enabled`] is set, optionally
//! prefixing each line with a timestamp (written in `date(1)` syntax and
//! translated by [`timefmt`]) and the `file:line` of the call. Error
//! helpers report where a failure was seen, and [`spinner`] draws a
//! progress glyph on a terminal.

pub mod caller;
pub mod cli;
pub mod emitter;
pub mod error;
pub mod iferr;
pub mod settings;
pub mod spinner;
pub mod term;
pub mod timefmt;

pub use caller::{CallSite, CallerResolver, SourceResolver};
pub use emitter::{DatePattern, Verb};
pub use error::{Error, ExitCode, Result};
pub use settings::{Destination, Settings};
pub use spinner::{Phase, Spinner, SpinnerHandle, StopSignal, StopToken, stop_channel};
pub use term::Target;
pub use timefmt::DateTemplate;

#[cfg(test)]
pub mod test_utils;
