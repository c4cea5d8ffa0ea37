use crate::burst::types::BestWindow;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks IPs by their best-window count and keeps the first `limit`.
///
/// Equal counts are ordered by IP, then by window start, so the output never depends on
/// hash map iteration order. A `limit` of zero or less yields nothing.
pub fn select_top(best_per_ip: &HashMap<String, BestWindow>, limit: i64) -> Vec<BestWindow> {
    let limit = match usize::try_from(limit) {
        Ok(0) | Err(_) => return Vec::new(),
        Ok(n) => n,
    };

    let mut ranked: Vec<BestWindow> = best_per_ip.values().cloned().collect();
    ranked.sort_by(rank_order);
    ranked.truncate(limit);
    ranked
}

pub fn rank_order(a: &BestWindow, b: &BestWindow) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.ip.cmp(&b.ip))
        .then_with(|| a.window_start.cmp(&b.window_start))
}
