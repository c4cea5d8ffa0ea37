use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single matching request pulled out of an access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub ip: String,
    pub timestamp: DateTime<Utc>,
}

impl AccessEvent {
    pub fn new(ip: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            ip: ip.into(),
            timestamp,
        }
    }
}

/// Identifies one bucket: an IP inside one truncated window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowKey {
    pub ip: String,
    pub window_start: DateTime<Utc>,
}

/// The window in which an IP produced the most events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestWindow {
    pub ip: String,
    pub count: u64,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}
