// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped terminal cursor ownership.

use std::io::{self, Write};

/// ANSI sequence hiding the text cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// ANSI sequence showing the text cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// A stream whose cursor is hidden for as long as the guard lives.
///
/// The cursor is shown again by [`HiddenCursor::release`] or, failing
/// that, on drop, including during unwinding.
pub struct HiddenCursor<W: Write> {
    out: Option<W>,
}

impl<W: Write> HiddenCursor<W> {
    /// Hide the cursor on `out`.
    pub fn acquire(mut out: W) -> Self {
        emit(&mut out, HIDE_CURSOR);
        Self { out: Some(out) }
    }

    /// Show the cursor and hand the stream back.
    pub fn release(mut self) -> Option<W> {
        let mut out = self.out.take()?;
        emit(&mut out, SHOW_CURSOR);
        Some(out)
    }
}

impl<W: Write> Write for HiddenCursor<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.out.as_mut() {
            Some(out) => out.write(buf),
            None => Err(io::Error::other("cursor already released")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => out.flush(),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        if let Some(out) = self.out.as_mut() {
            emit(out, SHOW_CURSOR);
        }
    }
}

fn emit<W: Write>(out: &mut W, seq: &str) {
    if let Err(e) = out.write_all(seq.as_bytes()).and_then(|()| out.flush()) {
        tracing::warn!("cursor control failed: {}", e);
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
