use crate::burst::types::{AccessEvent, BestWindow, WindowKey};
use crate::burst::window::{Period, window_bounds};
use std::collections::HashMap;
use tracing::debug;

/// Single-pass per-IP window counter.
///
/// Events must be pushed in the order they were read. The best window of an IP is only
/// replaced when a later window strictly beats it, so when two windows reach the same
/// maximum the one that got there first is kept.
pub struct WindowAggregator {
    period: Period,
    window_counts: HashMap<WindowKey, u64>,
    best_per_ip: HashMap<String, BestWindow>,
}

/// Final state of a [`WindowAggregator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowAggregation {
    pub period: Period,
    pub window_counts: HashMap<WindowKey, u64>,
    pub best_per_ip: HashMap<String, BestWindow>,
}

impl WindowAggregator {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            window_counts: HashMap::new(),
            best_per_ip: HashMap::new(),
        }
    }

    /// Counts `event` in its window. Events whose window cannot be represented are
    /// dropped.
    pub fn push(&mut self, event: &AccessEvent) {
        let Some((window_start, window_end)) = window_bounds(event.timestamp, self.period)
        else {
            debug!(ip = %event.ip, timestamp = %event.timestamp, "window out of range");
            return;
        };

        let key = WindowKey {
            ip: event.ip.clone(),
            window_start,
        };

        let count = {
            let c = self.window_counts.entry(key).or_insert(0);
            *c += 1;
            *c
        };

        let improved = self
            .best_per_ip
            .get(&event.ip)
            .is_none_or(|best| count > best.count);

        if improved {
            self.best_per_ip.insert(
                event.ip.clone(),
                BestWindow {
                    ip: event.ip.clone(),
                    count,
                    window_start,
                    window_end,
                },
            );
        }
    }

    /// Best window seen so far for `ip`.
    pub fn best(&self, ip: &str) -> Option<&BestWindow> {
        self.best_per_ip.get(ip)
    }

    pub fn finish(self) -> WindowAggregation {
        WindowAggregation {
            period: self.period,
            window_counts: self.window_counts,
            best_per_ip: self.best_per_ip,
        }
    }
}

/// Runs a fresh [`WindowAggregator`] over `events` in iteration order.
pub fn aggregate<'a, I>(events: I, period: Period) -> WindowAggregation
where
    I: IntoIterator<Item = &'a AccessEvent>,
{
    let mut agg = WindowAggregator::new(period);
    for event in events {
        agg.push(event);
    }
    agg.finish()
}
