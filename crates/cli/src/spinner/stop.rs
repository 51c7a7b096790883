// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot stop signalling.

use std::time::Duration;

use crossbeam_channel::{
    Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError, bounded,
};

/// Create a connected signal/token pair.
pub fn stop_channel() -> (StopSignal, StopToken) {
    let (tx, rx) = bounded::<()>(1);
    (StopSignal(tx), StopToken(rx))
}

/// Sending half. Cloning it lets several owners request the stop.
#[derive(Debug, Clone)]
pub struct StopSignal(Sender<()>);

impl StopSignal {
    /// Request a stop. Repeated requests are absorbed.
    ///
    /// Returns false when nobody holds the token any more.
    pub fn signal(&self) -> bool {
        match self.0.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => true,
            Err(TrySendError::Disconnected(())) => false,
        }
    }
}

/// Receiving half, held by whatever has to stop.
///
/// Dropping every [`StopSignal`] counts as a stop request.
#[derive(Debug, Clone)]
pub struct StopToken(Receiver<()>);

impl StopToken {
    /// Non-blocking check. Consumes a pending request.
    pub fn is_signaled(&self) -> bool {
        match self.0.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => true,
            Err(TryRecvError::Empty) => false,
        }
    }

    /// Wait up to `timeout` for a request.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.0.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => false,
        }
    }

    /// Block until a request arrives.
    pub fn wait(&self) {
        // Err means every signal was dropped, which is a stop as well.
        let _ = self.0.recv();
    }
}

#[cfg(test)]
#[path = "stop_tests.rs"]
mod tests;
