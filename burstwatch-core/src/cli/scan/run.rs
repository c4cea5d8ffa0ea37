use crate::burst::{WindowAggregator, select_top};
use crate::cli::scan::ScanArgs;
use crate::conf::{OutputFormat, ScanSettings, resolve_settings};
use crate::ingest::{ScanError, discover, scan};
use crate::report::{BurstReport, render_json, render_table};
use anyhow::Result;
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run_scan(args: &ScanArgs) -> Result<()> {
    let settings = resolve_settings(args.config.as_deref(), &args.overrides())?;

    // Nothing is printed until every file has been read.
    let report = build_report(&settings)?;

    let rendered = match settings.format {
        OutputFormat::Table => render_table(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Runs a full scan with fresh aggregation state and ranks the result.
pub fn build_report(settings: &ScanSettings) -> Result<BurstReport, ScanError> {
    let paths = discover(&settings.log_pattern)?;

    if paths.is_empty() {
        warn!(pattern = %settings.log_pattern, "no log files matched");
    } else {
        info!(pattern = %settings.log_pattern, files = paths.len(), "discovered log files");
    }

    let mut aggregator = WindowAggregator::new(settings.period);
    let stats = scan(&paths, &settings.line_filter(), |event| aggregator.push(&event))?;
    let aggregation = aggregator.finish();

    let records = select_top(&aggregation.best_per_ip, settings.limit);

    info!(
        files = stats.files,
        lines = stats.lines,
        matched = stats.matched,
        skipped = stats.skipped(),
        ips = aggregation.best_per_ip.len(),
        windows = aggregation.window_counts.len(),
        reported = records.len(),
        "scan complete"
    );

    Ok(BurstReport {
        needle: settings.needle.clone(),
        status: settings.status.clone(),
        period: settings.period,
        stats,
        records,
    })
}
