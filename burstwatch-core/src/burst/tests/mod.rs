
use crate::burst::{AccessEvent, Period};
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------

/// 2024-10-10 at the given wall clock time, UTC.
fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 10, hour, min, sec).unwrap()
}

fn event(ip: &str, hour: u32, min: u32, sec: u32) -> AccessEvent {
    AccessEvent::new(ip, at(hour, min, sec))
}

fn minutes(n: u64) -> Period {
    Period::new(Duration::from_secs(n * 60)).unwrap()
}
