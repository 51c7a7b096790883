//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Serialize, Serializer};
use tempfile::TempDir;

use crate::caller::{CallSite, CallerResolver};

/// An in-memory sink that can be cloned into threads and read back.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that rejects every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}

/// Resolver returning fixed sites and counting lookups.
#[derive(Default)]
pub struct CountingResolver {
    calls: AtomicUsize,
    outer_calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn outer_calls(&self) -> usize {
        self.outer_calls.load(Ordering::SeqCst)
    }
}

impl CallerResolver for CountingResolver {
    fn resolve(&self, location: &'static Location<'static>) -> CallSite {
        self.calls.fetch_add(1, Ordering::SeqCst);
        CallSite::from(location)
    }

    fn resolve_outer(&self, _location: &'static Location<'static>) -> CallSite {
        self.outer_calls.fetch_add(1, Ordering::SeqCst);
        CallSite::new("src/outer.rs", 7)
    }
}

/// A payload that records how often it was serialized.
#[derive(Default)]
pub struct CountingPayload {
    pub serialized: AtomicUsize,
}

impl Serialize for CountingPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialized.fetch_add(1, Ordering::SeqCst);
        serializer.serialize_str("counted")
    }
}

/// A payload whose serialization always fails.
pub struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("refusing to serialize"))
    }
}

/// Creates a temp directory with a settings file.
pub fn temp_settings(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("verbose.toml"), content).unwrap();
    dir
}
