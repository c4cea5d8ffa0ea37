mod render;


use crate::burst::{BestWindow, Period};
use crate::ingest::ScanStats;

pub use render::*;

/// Everything needed to print the outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurstReport {
    pub needle: String,
    pub status: Option<String>,
    pub period: Period,
    pub stats: ScanStats,
    /// Ranked, busiest first.
    pub records: Vec<BestWindow>,
}
