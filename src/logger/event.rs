//! Log event type and formats
//!
//! One structured record per event. Two renderings exist: the
//! simplified console form and the JSON line written to the log files.

use chrono::Local;
use serde::Serialize;

use super::SERVICE_NAME;

/// Event severity. Determines which destinations receive the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A single structured log record.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
    pub service: &'static str,
    pub timestamp: String,
}

impl LogEvent {
    pub fn new(level: Level, message: String) -> Self {
        Self {
            level,
            message,
            service: SERVICE_NAME,
            timestamp: Local::now().to_rfc3339(),
        }
    }

    /// Simplified console format: `level: message`.
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.level.as_str(), self.message)
    }

    /// JSON line for the file destinations. Serialization of this type
    /// cannot fail in practice; the simple format is the fallback.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.format_simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_format_is_level_colon_message() {
        let event = LogEvent::new(Level::Error, "bad input".to_string());
        assert_eq!(event.format_simple(), "error: bad input");
    }

    #[test]
    fn json_contains_all_fields() {
        let event = LogEvent::new(Level::Info, "2 + 3 = 5".to_string());
        let value: serde_json::Value = serde_json::from_str(&event.to_json()).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "2 + 3 = 5");
        assert_eq!(value["service"], SERVICE_NAME);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn levels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Info).unwrap(), "\"info\"");
        assert_eq!(serde_json::to_string(&Level::Error).unwrap(), "\"error\"");
    }
}
