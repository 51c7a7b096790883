// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal progress spinner.
//!
//! A spinner redraws `label glyph` in place on one line until stopped,
//! then blanks the line. It expects exclusive use of its stream while it
//! runs; anything else written there in the meantime garbles the line.
//!
//! When the stream is not a terminal the spinner is built inert and never
//! writes, so output can be redirected to files and pipes safely.
//!
//! Drive it by hand (`start`, `tick`, `clear`), let [`Spinner::run`] do
//! the loop on the current thread, or [`Spinner::spawn`] it in the
//! background:
//!
//! ```ignore
//! let handle = Spinner::stderr("Working:", 13).spawn();
//! do_work();
//! handle.stop();
//! ```

mod cursor;
mod glyphs;
mod interrupt;
mod stop;

use std::io::{self, Stderr, Stdout, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub use cursor::{HIDE_CURSOR, HiddenCursor, SHOW_CURSOR};
pub use glyphs::{GLYPHS, frames, sequence};
pub use interrupt::{INTERRUPTED_STATUS, InterruptGuard, Interrupts};
pub use stop::{StopSignal, StopToken, stop_channel};

use crate::emitter::Verb;
use crate::term::{Target, is_interactive};

/// Redraws per second unless configured otherwise.
pub const DEFAULT_SPEED: u32 = 10;

/// Label used by [`Verb::spin`].
pub const SPIN_LABEL: &str = "Working:";

/// Redraws per second used by [`Verb::spin`].
pub const SPIN_SPEED: u32 = 7;

/// Columns drawn beyond the label: space, glyph, space.
const GLYPH_COLUMNS: usize = 3;

/// Lifecycle phase of a spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built, not yet started.
    Idle,
    /// Cursor hidden, redrawing on every tick.
    Spinning,
    /// Line blanked, cursor shown. Terminal.
    Cleared,
}

enum State<W: Write> {
    Idle(W),
    Spinning(HiddenCursor<W>),
    Cleared(W),
    /// Not attached to a terminal; never written to.
    Inert(W),
    /// Placeholder while a transition moves the stream.
    Moving,
}

/// A single-line terminal spinner.
pub struct Spinner<W: Write> {
    label: String,
    frames: Vec<char>,
    position: usize,
    speed: u32,
    state: State<W>,
}

impl Spinner<Stderr> {
    /// Spinner on stderr, inert unless stderr is a terminal.
    pub fn stderr(label: &str, kind: usize) -> Self {
        let out = io::stderr();
        let interactive = is_interactive(&out);
        Self::attach(label, out, interactive, kind)
    }
}

impl Spinner<Stdout> {
    /// Spinner on stdout, inert unless stdout is a terminal.
    pub fn stdout(label: &str, kind: usize) -> Self {
        let out = io::stdout();
        let interactive = is_interactive(&out);
        Self::attach(label, out, interactive, kind)
    }
}

impl Spinner<Box<dyn Write + Send>> {
    /// Spinner on the named standard stream.
    pub fn for_target(label: &str, target: Target, kind: usize) -> Self {
        let interactive = target.is_interactive();
        Self::attach(label, target.writer(), interactive, kind)
    }
}

impl<W: Write> Spinner<W> {
    /// Spinner on an arbitrary stream whose interactivity was probed by
    /// the caller. The probe result is final.
    pub fn attach(label: &str, out: W, interactive: bool, kind: usize) -> Self {
        let state = if interactive {
            State::Idle(out)
        } else {
            tracing::debug!("spinner stream is not a terminal; staying inert");
            State::Inert(out)
        };
        Self {
            label: label.to_string(),
            frames: frames(kind),
            position: 0,
            speed: DEFAULT_SPEED,
            state,
        }
    }

    /// Set redraws per second. Zero is treated as one.
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Time between redraws, never below one millisecond.
    pub fn period(&self) -> Duration {
        Duration::from_millis((1000 / u64::from(self.speed)).max(1))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn frames(&self) -> &[char] {
        &self.frames
    }

    /// Index of the frame drawn last.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The frame drawn last.
    pub fn current(&self) -> char {
        self.frames[self.position]
    }

    pub fn is_inert(&self) -> bool {
        matches!(self.state, State::Inert(_))
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Spinning(_) => Phase::Spinning,
            State::Cleared(_) => Phase::Cleared,
            State::Idle(_) | State::Inert(_) | State::Moving => Phase::Idle,
        }
    }

    /// Hide the cursor and begin spinning. Only valid from `Idle`.
    pub fn start(&mut self) {
        match std::mem::replace(&mut self.state, State::Moving) {
            State::Idle(out) => {
                tracing::debug!("spinner start: {} frames at {}Hz", self.frames.len(), self.speed);
                self.state = State::Spinning(HiddenCursor::acquire(out));
            }
            other => self.state = other,
        }
    }

    /// Advance one frame and redraw the line in place.
    pub fn tick(&mut self) {
        let State::Spinning(out) = &mut self.state else {
            return;
        };
        self.position = (self.position + 1) % self.frames.len();
        let frame = format!("\r{} {} ", self.label, self.frames[self.position]);
        if let Err(e) = out.write_all(frame.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("spinner redraw failed: {}", e);
        }
    }

    /// Blank the drawn line and restore the cursor.
    ///
    /// A spinner that never started is marked cleared without writing.
    pub fn clear(&mut self) {
        match std::mem::replace(&mut self.state, State::Moving) {
            State::Spinning(mut out) => {
                let blank = " ".repeat(self.label.chars().count() + GLYPH_COLUMNS);
                if let Err(e) = write!(out, "\r{}\r", blank).and_then(|()| out.flush()) {
                    tracing::warn!("spinner clear failed: {}", e);
                }
                match out.release() {
                    Some(out) => self.state = State::Cleared(out),
                    None => tracing::warn!("spinner stream lost during clear"),
                }
                tracing::debug!("spinner cleared");
            }
            State::Idle(out) => self.state = State::Cleared(out),
            other => self.state = other,
        }
    }

    /// Spin on the current thread until `stop` fires, then clear.
    ///
    /// The stop request is checked before every redraw and interrupts the
    /// wait between redraws.
    pub fn run(&mut self, stop: &StopToken) {
        if self.is_inert() {
            stop.wait();
            return;
        }

        self.start();
        loop {
            if stop.is_signaled() {
                break;
            }
            self.tick();
            if stop.wait_timeout(self.period()) {
                break;
            }
        }
        self.clear();
    }

    /// Take the stream back.
    pub fn into_inner(self) -> Option<W> {
        match self.state {
            State::Idle(out) | State::Cleared(out) | State::Inert(out) => Some(out),
            State::Spinning(cursor) => cursor.release(),
            State::Moving => None,
        }
    }
}

impl<W: Write + Send + 'static> Spinner<W> {
    /// Run the spinner on a background thread.
    pub fn spawn(self) -> SpinnerHandle<W> {
        let (signal, token) = stop_channel();
        self.spawn_until(signal, token)
    }

    /// Run on a background thread until `token` fires. `signal` is kept
    /// by the handle so [`SpinnerHandle::stop`] can fire it.
    ///
    /// A terminal-attached spinner is also stopped by Ctrl-C, which clears
    /// the line and restores the cursor before the process exits.
    pub fn spawn_until(self, signal: StopSignal, token: StopToken) -> SpinnerHandle<W> {
        if !self.is_inert() {
            interrupt::install_handler();
        }
        self.spawn_registered(signal, token, &interrupt::SPINNERS)
    }

    /// [`Spinner::spawn_until`], registering with `interrupts` while it
    /// runs so [`Interrupts::stop_all`] can end it.
    pub fn spawn_registered(
        mut self,
        signal: StopSignal,
        token: StopToken,
        interrupts: &'static Interrupts,
    ) -> SpinnerHandle<W> {
        let registration = signal.clone();
        let thread = thread::spawn(move || {
            let _registered = (!self.is_inert()).then(|| interrupts.register(registration));
            self.run(&token);
            self
        });
        SpinnerHandle { signal, thread }
    }
}

/// Control for a spinner running in the background.
pub struct SpinnerHandle<W: Write> {
    signal: StopSignal,
    thread: JoinHandle<Spinner<W>>,
}

impl<W: Write> SpinnerHandle<W> {
    /// Another way to fire the stop, e.g. from a signal handler thread.
    pub fn signal(&self) -> StopSignal {
        self.signal.clone()
    }

    /// Stop the spinner and wait for it to clear its line.
    pub fn stop(self) -> thread::Result<Spinner<W>> {
        self.signal.signal();
        self.thread.join()
    }
}

impl Verb<'_> {
    /// A handle that ends a running [`Verb::spin`].
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.0.clone()
    }

    /// Show a `Working:` spinner on stderr until the stop signal fires,
    /// then write `Done` to the output.
    ///
    /// ```ignore
    /// let stop = verb.stop_signal();
    /// std::thread::spawn(move || { slow_work(); stop.signal(); });
    /// verb.spin(0);
    /// ```
    pub fn spin(&mut self, kind: usize) {
        self.spin_with(Spinner::stderr(SPIN_LABEL, kind).with_speed(SPIN_SPEED));
    }

    /// [`Verb::spin`] with a caller-built spinner.
    pub fn spin_with<W: Write + Send + 'static>(&mut self, spinner: Spinner<W>) {
        let (signal, token) = stop_channel();
        let handle = spinner.spawn_until(signal, token);
        self.stop.1.wait();
        if handle.stop().is_err() {
            tracing::warn!("spinner thread panicked");
        }
        self.write_line("Done\n");
        self.flush();
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
