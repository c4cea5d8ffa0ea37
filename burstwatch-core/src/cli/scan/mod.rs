//! `burstwatch scan`
//!
//! Resolves settings, scans the matching logs and prints the busiest IPs.
//!
//! settings
//! discover
//! scan + WindowAggregator
//! select_top
//! BurstReport
//! render_table / render_json
//!

mod run;

use crate::burst::Period;
use crate::conf::{OutputFormat, SettingsOverrides};
use clap::Args;
use std::path::PathBuf;

pub use run::{build_report, run_scan};

#[derive(Args, Debug, Default, Clone)]
pub struct ScanArgs {
    /// Path to an HCL settings file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log file glob pattern [default: /var/log/nginx/access.log]
    #[arg(long)]
    pub log: Option<String>,

    /// String to match in log lines [default: wp-admin]
    #[arg(long = "match", short = 'm')]
    pub needle: Option<String>,

    /// HTTP status code to count, "" for any [default: 200]
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Number of top results to display [default: 10]
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Window length, e.g. 30s, 10m, 1h [default: 10m]
    #[arg(long, short = 'p')]
    pub period: Option<Period>,

    /// Output format [default: table]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ScanArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            log: self.log.clone(),
            needle: self.needle.clone(),
            status: self.status.clone(),
            limit: self.limit,
            period: self.period,
            format: self.format,
        }
    }
}
