//! Burst Detection
//!
//! This module turns a flat sequence of access events into per-IP burst statistics.
//!
//! Every event is dropped into a fixed-size time window (its timestamp rounded down to a
//! multiple of the period, counted from 0001-01-01 UTC). Each `(ip, window)` pair keeps a
//! running counter, and each IP remembers the single window where its counter climbed the
//! highest. Once every event has been seen, the IPs are ranked by that best count and the
//! top offenders are returned.
//!
//! The overall data processing architecture is:
//!
//! AccessEvent
//! WindowAggregator::push
//! WindowAggregation
//! select_top
//! Vec<BestWindow>
//!

mod aggregation;
mod top;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use aggregation::*;
pub use top::*;
pub use types::*;
pub use window::*;
