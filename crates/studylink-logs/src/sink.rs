//! Output sinks for log entries.
//!
//! This module provides:
//! - [`Sink`] — Abstract four-channel output surface, one channel per severity
//! - [`ConsoleSink`] — Writes to stdout/stderr, split by severity
//! - [`TracingSink`] — Forwards to the `tracing` facade
//!
//! Sinks receive entries after the store has committed them; a sink that
//! drops or mangles its output can lose that output, but never store state.

use std::io::Write;

use serde_json::Value;

use crate::types::{LogEntry, LogLevel};

/// A per-severity output surface for formatted log lines.
///
/// Each method receives the already-formatted line plus the entry's opaque
/// payload, if any. Implementations must not fail back into the store;
/// output problems are the sink's own concern.
pub trait Sink: Send + Sync {
    /// Receives a line routed at debug severity.
    fn debug(&self, line: &str, data: Option<&Value>);

    /// Receives a line routed at info severity.
    fn info(&self, line: &str, data: Option<&Value>);

    /// Receives a line routed at warn severity.
    fn warn(&self, line: &str, data: Option<&Value>);

    /// Receives a line routed at error severity.
    fn error(&self, line: &str, data: Option<&Value>);

    /// Formats the entry and delivers it to the channel selected by its
    /// level. An entry is delivered to exactly one channel.
    fn dispatch(&self, entry: &LogEntry) {
        let line = entry.format_line();
        let data = entry.data.as_ref();
        match entry.level {
            LogLevel::Debug => self.debug(&line, data),
            LogLevel::Info => self.info(&line, data),
            LogLevel::Warn => self.warn(&line, data),
            LogLevel::Error => self.error(&line, data),
        }
    }
}

/// Sink that writes to the process console.
///
/// Debug and info lines go to stdout, warn and error lines to stderr. The
/// payload, when present, is appended to the line as compact JSON. Write
/// failures are swallowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_line(mut out: impl Write, line: &str, data: Option<&Value>) {
        let _ = match data {
            Some(value) => writeln!(out, "{line} {value}"),
            None => writeln!(out, "{line}"),
        };
    }
}

impl Sink for ConsoleSink {
    fn debug(&self, line: &str, data: Option<&Value>) {
        Self::write_line(std::io::stdout().lock(), line, data);
    }

    fn info(&self, line: &str, data: Option<&Value>) {
        Self::write_line(std::io::stdout().lock(), line, data);
    }

    fn warn(&self, line: &str, data: Option<&Value>) {
        Self::write_line(std::io::stderr().lock(), line, data);
    }

    fn error(&self, line: &str, data: Option<&Value>) {
        Self::write_line(std::io::stderr().lock(), line, data);
    }
}

/// Sink that forwards lines to the `tracing` facade at the matching event
/// level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a tracing sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn debug(&self, line: &str, data: Option<&Value>) {
        match data {
            Some(value) => tracing::debug!(data = %value, "{line}"),
            None => tracing::debug!("{line}"),
        }
    }

    fn info(&self, line: &str, data: Option<&Value>) {
        match data {
            Some(value) => tracing::info!(data = %value, "{line}"),
            None => tracing::info!("{line}"),
        }
    }

    fn warn(&self, line: &str, data: Option<&Value>) {
        match data {
            Some(value) => tracing::warn!(data = %value, "{line}"),
            None => tracing::warn!("{line}"),
        }
    }

    fn error(&self, line: &str, data: Option<&Value>) {
        match data {
            Some(value) => tracing::error!(data = %value, "{line}"),
            None => tracing::error!("{line}"),
        }
    }
}
