//! # studylink-logs
//!
//! Bounded in-memory diagnostic logging for StudyLink.
//!
//! This crate provides:
//!
//! - [`LogLevel`] — Severity levels (Debug, Info, Warn, Error)
//! - [`LogEntry`] — Timestamped log entries with an opaque JSON payload
//! - [`LogStore`] — Bounded FIFO log storage with per-severity fanout
//! - [`Sink`] — Abstract per-severity output surface
//! - [`ConsoleSink`] / [`TracingSink`] — Ready-made sink implementations
//!
//! Every write is recorded unconditionally; severity is used for routing
//! and display only, never for filtering at the call site. Logging is
//! infallible by design: no write, read, or clear operation returns an
//! error or panics.
//!
//! ## Example
//!
//! ```rust
//! use studylink_logs::LogStore;
//! use serde_json::json;
//!
//! let store = LogStore::default();
//! store.info("session started", None);
//! store.error("profile save failed", Some(json!({ "attempt": 2 })));
//!
//! let recent = store.snapshot();
//! assert_eq!(recent.len(), 2);
//! assert_eq!(recent[1].message, "profile save failed");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod sink;
pub mod store;
pub mod types;

// Re-export main types
pub use error::{LogError, Result};
pub use sink::{ConsoleSink, Sink, TracingSink};
pub use store::{shared_store, LogStore, LogStoreConfig, SharedLogStore};
pub use types::{LogEntry, LogLevel};
