//! Bounded in-memory log storage.
//!
//! This module provides:
//! - [`LogStore`] — Bounded FIFO storage with per-severity sink fanout
//! - [`LogStoreConfig`] — Capacity configuration
//! - [`LogStore::global`] — The process-wide store instance
//!
//! Every accepted entry is committed (appended, oldest evicted if over
//! capacity) before the sink sees it; sink behavior never alters store
//! state. Reads hand out defensive copies, so the buffer is only ever
//! mutated through the write and clear operations here.

use std::collections::VecDeque;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::Result;
use crate::sink::{ConsoleSink, Sink};
use crate::types::{LogEntry, LogLevel};

/// Default maximum number of retained entries.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Configuration for the log store.
#[derive(Debug, Clone)]
pub struct LogStoreConfig {
    /// Maximum number of log entries to keep.
    pub capacity: usize,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Bounded in-memory log store with per-severity sink fanout.
///
/// Entries are retained in insertion order. Once the buffer exceeds its
/// capacity, the oldest entries are evicted first; entries in the middle
/// of the sequence are never dropped ahead of older ones.
pub struct LogStore {
    /// Configuration
    config: LogStoreConfig,
    /// Retained entries, oldest first
    entries: RwLock<VecDeque<LogEntry>>,
    /// Output surface for accepted entries
    sink: Arc<dyn Sink>,
}

/// The process-wide store. Constructed on first access, exactly once.
static GLOBAL: Lazy<LogStore> = Lazy::new(LogStore::new);

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore {
    /// Creates a store with default capacity, writing to the console.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(ConsoleSink::new()))
    }

    /// Creates a store with default capacity and the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self::with_config(LogStoreConfig::default(), sink)
    }

    /// Creates a store with full configuration.
    #[must_use]
    pub fn with_config(config: LogStoreConfig, sink: Arc<dyn Sink>) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            config,
            sink,
        }
    }

    /// Returns the process-wide store, constructing it on first access.
    ///
    /// All callers observe the same state; a write through one reference is
    /// visible through every other.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Records a debug-level entry.
    pub fn debug(&self, message: impl Into<String>, data: Option<serde_json::Value>) {
        self.record(LogLevel::Debug, message, data);
    }

    /// Records an info-level entry.
    pub fn info(&self, message: impl Into<String>, data: Option<serde_json::Value>) {
        self.record(LogLevel::Info, message, data);
    }

    /// Records a warn-level entry.
    pub fn warn(&self, message: impl Into<String>, data: Option<serde_json::Value>) {
        self.record(LogLevel::Warn, message, data);
    }

    /// Records an error-level entry.
    pub fn error(&self, message: impl Into<String>, data: Option<serde_json::Value>) {
        self.record(LogLevel::Error, message, data);
    }

    /// Appends an entry, evicts down to capacity, then dispatches to the
    /// sink. The append/evict region is one critical section; dispatch
    /// happens after commit.
    fn record(&self, level: LogLevel, message: impl Into<String>, data: Option<serde_json::Value>) {
        let entry = LogEntry::new(level, message, data);

        {
            let mut entries = self.entries.write();
            entries.push_back(entry.clone());

            // Enforce capacity, oldest first
            while entries.len() > self.config.capacity {
                entries.pop_front();
            }
        }

        self.sink.dispatch(&entry);
    }

    /// Returns a copy of the retained entries, oldest first.
    ///
    /// The returned vector does not alias internal storage; mutating it
    /// has no effect on the store.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.read().iter().cloned().collect()
    }

    /// Returns a copy of the retained entries at or above the given
    /// severity, oldest first.
    ///
    /// This is a presentation-side filter; the store itself retains every
    /// level.
    #[must_use]
    pub fn snapshot_at_least(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.level.is_at_least(level))
            .cloned()
            .collect()
    }

    /// Serializes a snapshot of the retained entries to a JSON array.
    pub fn export_json(&self) -> Result<String> {
        let entries = self.snapshot();
        Ok(serde_json::to_string(&entries)?)
    }

    /// Returns the number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no entries are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Removes all retained entries. Capacity is unchanged; calling this
    /// twice is the same as calling it once.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// Shared log store handle.
pub type SharedLogStore = Arc<LogStore>;

/// Creates a new shared log store with the given capacity and sink.
#[must_use]
pub fn shared_store(capacity: usize, sink: Arc<dyn Sink>) -> SharedLogStore {
    Arc::new(LogStore::with_config(LogStoreConfig { capacity }, sink))
}
