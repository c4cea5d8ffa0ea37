use super::BurstReport;
use crate::ingest::{ScanStats, TIMESTAMP_FORMAT};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn render_table(report: &BurstReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Top {} IPs with the highest number of {} status codes for {} in a {} period:\n\
         Rank | IP Address | Max Count | Period\n\
         -----|------------|-----------|------------------------\n",
        report.records.len(),
        report.status.as_deref().unwrap_or("any"),
        report.needle,
        report.period,
    ));

    for (i, record) in report.records.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} | {:<10} | {:>9} | {} to {}\n",
            i + 1,
            record.ip,
            record.count,
            record.window_start.format(TIMESTAMP_FORMAT),
            record.window_end.format(TIMESTAMP_FORMAT),
        ));
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    needle: &'a str,
    status: Option<&'a str>,
    period: String,
    period_seconds: u64,
    stats: &'a ScanStats,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    rank: usize,
    ip: &'a str,
    count: u64,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
}

pub fn render_json(report: &BurstReport) -> Result<String> {
    let json = JsonReport {
        needle: &report.needle,
        status: report.status.as_deref(),
        period: report.period.to_string(),
        period_seconds: report.period.as_duration().as_secs(),
        stats: &report.stats,
        records: report
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| JsonRecord {
                rank: i + 1,
                ip: &r.ip,
                count: r.count,
                window_start: r.window_start,
                window_end: r.window_end,
            })
            .collect(),
    };

    let mut s = serde_json::to_string_pretty(&json)?;
    s.push('\n');
    Ok(s)
}
