// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ctrl-C handling for running spinners.
//!
//! A spinner hides the cursor, and a SIGINT would end the process before
//! any guard could show it again. Background spinners therefore register
//! their stop signal here. The first registration installs a process-wide
//! handler that stops every registered spinner, waits briefly for each to
//! blank its line and restore the cursor, then exits with status 130.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, Once, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use super::StopSignal;

/// Exit status after an interrupt, as shells report SIGINT.
pub const INTERRUPTED_STATUS: i32 = 130;

/// How long the handler waits for spinners to clear.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

const DRAIN_POLL: Duration = Duration::from_millis(5);

/// Spinners the Ctrl-C handler stops.
pub(crate) static SPINNERS: Interrupts = Interrupts::new();

static HANDLER: Once = Once::new();

/// A set of stop signals to fire together.
pub struct Interrupts {
    active: Mutex<Vec<(usize, StopSignal)>>,
    next_id: AtomicUsize,
}

impl Interrupts {
    pub const fn new() -> Self {
        Self {
            active: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(0),
        }
    }

    /// Add `signal` until the returned guard drops.
    pub fn register(&self, signal: StopSignal) -> InterruptGuard<'_> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, signal));
        InterruptGuard { owner: self, id }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Fire every registered signal, then wait up to `timeout` for all
    /// guards to drop. Returns whether they did.
    pub fn stop_all(&self, timeout: Duration) -> bool {
        let signals: Vec<StopSignal> = self.lock().iter().map(|(_, s)| s.clone()).collect();
        for signal in &signals {
            signal.signal();
        }
        drop(signals);

        let deadline = Instant::now() + timeout;
        while !self.is_empty() {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(DRAIN_POLL);
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(usize, StopSignal)>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Interrupts {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration of one stop signal.
pub struct InterruptGuard<'a> {
    owner: &'a Interrupts,
    id: usize,
}

impl Drop for InterruptGuard<'_> {
    fn drop(&mut self) {
        self.owner.lock().retain(|(id, _)| *id != self.id);
    }
}

/// Install the Ctrl-C handler once per process.
///
/// If the program already installed its own handler, this one is skipped
/// and interrupts behave as the program decides.
pub(crate) fn install_handler() {
    HANDLER.call_once(|| {
        let installed = ctrlc::set_handler(|| {
            tracing::debug!("interrupted; stopping {} spinner(s)", SPINNERS.len());
            if !SPINNERS.stop_all(DRAIN_TIMEOUT) {
                tracing::warn!("spinners did not clear before exit");
            }
            std::process::exit(INTERRUPTED_STATUS);
        });
        if let Err(e) = installed {
            tracing::debug!("ctrl-c handler not installed: {}", e);
        }
    });
}

#[cfg(test)]
#[path = "interrupt_tests.rs"]
mod tests;
