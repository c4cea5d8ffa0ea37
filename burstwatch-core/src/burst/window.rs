use crate::conf::ConfigError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const NANOS_PER_SEC: i128 = 1_000_000_000;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10 * 60);

/// Upper bound on a window length. Keeps every offset inside a window representable
/// as an `i64` count of nanoseconds.
pub const MAX_PERIOD: Duration = Duration::from_secs(366 * 24 * 60 * 60);

/// Length of a burst window. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    duration: Duration,
    delta: TimeDelta,
}

impl Period {
    pub fn new(duration: Duration) -> Result<Self, ConfigError> {
        if duration.is_zero() {
            return Err(ConfigError::ZeroPeriod);
        }

        let too_large = || ConfigError::PeriodTooLarge {
            period: humantime::format_duration(duration).to_string(),
        };

        if duration > MAX_PERIOD {
            return Err(too_large());
        }

        let delta = TimeDelta::from_std(duration).map_err(|_| too_large())?;
        Ok(Self { duration, delta })
    }

    pub fn as_duration(&self) -> Duration {
        self.duration
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        self.delta
    }

    fn as_nanos(&self) -> i128 {
        // Bounded by MAX_PERIOD.
        self.duration.as_nanos() as i128
    }
}

impl Default for Period {
    fn default() -> Self {
        Self {
            duration: DEFAULT_PERIOD,
            delta: TimeDelta::minutes(10),
        }
    }
}

impl FromStr for Period {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let duration =
            humantime::parse_duration(s.trim()).map_err(|source| ConfigError::InvalidPeriod {
                value: s.to_string(),
                source,
            })?;
        Self::new(duration)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", humantime::format_duration(self.duration))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Seconds from 0001-01-01T00:00:00Z, the origin windows are aligned to, to the Unix
/// epoch.
const ZERO_TIME_TO_EPOCH_SECS: i128 = 62_135_596_800;

/// Rounds `timestamp` down to the start of its window.
///
/// Windows are multiples of `period` counted from 0001-01-01T00:00:00Z, so the same
/// timestamp always lands in the same window regardless of what else was scanned, and
/// week long windows start on a Monday.
///
/// Returns `None` when the window start is not representable.
pub fn truncate(timestamp: DateTime<Utc>, period: Period) -> Option<DateTime<Utc>> {
    let nanos = (i128::from(timestamp.timestamp()) + ZERO_TIME_TO_EPOCH_SECS) * NANOS_PER_SEC
        + i128::from(timestamp.timestamp_subsec_nanos());

    let offset = nanos.rem_euclid(period.as_nanos());

    // offset < period <= MAX_PERIOD
    timestamp.checked_sub_signed(TimeDelta::nanoseconds(offset as i64))
}

/// Start and end of the window containing `timestamp`. The end is exclusive.
///
/// Returns `None` when either bound falls outside the range `DateTime<Utc>` can hold.
pub fn window_bounds(
    timestamp: DateTime<Utc>,
    period: Period,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = truncate(timestamp, period)?;
    let end = start.checked_add_signed(period.as_time_delta())?;
    Some((start, end))
}
