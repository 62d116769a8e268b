//! Core types for the logging system.
//!
//! This module provides:
//! - [`LogLevel`] — Severity levels for log entries
//! - [`LogEntry`] — Timestamped entry with an opaque structured payload

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Log severity levels, ordered from most to least verbose.
///
/// Severity selects the output channel an entry is routed to; it is never
/// used to filter entries out of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Debugging information
    Debug = 0,
    /// General information
    Info = 1,
    /// Warning conditions
    Warn = 2,
    /// Error conditions
    Error = 3,
}

impl LogLevel {
    /// Returns true if this level is at least as severe as the given level.
    #[must_use]
    pub fn is_at_least(&self, level: Self) -> bool {
        *self >= level
    }

    /// Returns the channel name of this level, as it appears in formatted
    /// output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// A single log entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Severity level
    pub level: LogLevel,
    /// The log message
    pub message: String,
    /// Optional structured payload, carried through to the sink unexamined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl LogEntry {
    /// Creates an entry at the given level, timestamped now.
    #[must_use]
    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            data,
        }
    }

    /// Renders the entry in the interop line format:
    /// `[<ISO-8601 timestamp>] [<LEVEL>] <message>`.
    ///
    /// The timestamp is RFC 3339 with millisecond precision and a trailing
    /// `Z`, e.g. `2026-03-01T12:30:45.000Z`. The payload is not part of the
    /// line; sinks receive it separately.
    #[must_use]
    pub fn format_line(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level.as_str(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    // ===========================================
    // LogLevel Tests
    // ===========================================

    #[test]
    fn log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn log_level_is_at_least() {
        assert!(LogLevel::Error.is_at_least(LogLevel::Debug));
        assert!(LogLevel::Error.is_at_least(LogLevel::Error));
        assert!(!LogLevel::Debug.is_at_least(LogLevel::Info));
    }

    #[test]
    fn log_level_as_str() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Info).expect("serialize");
        assert_eq!(json, "\"INFO\"");

        let level: LogLevel = serde_json::from_str("\"WARN\"").expect("deserialize");
        assert_eq!(level, LogLevel::Warn);
    }

    // ===========================================
    // LogEntry Tests
    // ===========================================

    #[test]
    fn entry_new_captures_level_and_message() {
        let entry = LogEntry::new(LogLevel::Warn, "quota low", None);
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.message, "quota low");
        assert!(entry.data.is_none());
    }

    #[test]
    fn entry_carries_payload_unexamined() {
        let payload = json!({ "buddy_id": 7, "nested": { "ok": false } });
        let entry = LogEntry::new(LogLevel::Info, "buddy post created", Some(payload.clone()));
        assert_eq!(entry.data, Some(payload));
    }

    #[test]
    fn format_line_exact() {
        let timestamp = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 30, 45)
            .single()
            .expect("valid timestamp");
        let entry = LogEntry {
            timestamp,
            level: LogLevel::Error,
            message: "disk full".to_string(),
            data: None,
        };
        assert_eq!(
            entry.format_line(),
            "[2026-03-01T12:30:45.000Z] [ERROR] disk full"
        );
    }

    #[test]
    fn format_line_ignores_payload() {
        let timestamp = Utc
            .with_ymd_and_hms(2026, 3, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        let entry = LogEntry {
            timestamp,
            level: LogLevel::Debug,
            message: "cache warm".to_string(),
            data: Some(json!([1, 2, 3])),
        };
        assert_eq!(
            entry.format_line(),
            "[2026-03-01T08:00:00.000Z] [DEBUG] cache warm"
        );
    }

    #[test]
    fn entry_serialization_roundtrip() {
        let entry = LogEntry::new(LogLevel::Info, "saved", Some(json!({ "id": 1 })));
        let json = serde_json::to_string(&entry).expect("serialize");
        let parsed: LogEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, entry);
    }

    #[test]
    fn entry_serialization_omits_absent_payload() {
        let entry = LogEntry::new(LogLevel::Debug, "tick", None);
        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(!json.contains("data"));
    }
}
