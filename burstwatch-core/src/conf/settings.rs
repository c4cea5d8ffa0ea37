use crate::burst::Period;
use crate::conf::ConfigError;
use crate::ingest::LineFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_PATTERN: &str = "/var/log/nginx/access.log";
pub const DEFAULT_NEEDLE: &str = "wp-admin";
pub const DEFAULT_STATUS: &str = "200";
pub const DEFAULT_LIMIT: i64 = 10;

pub const SETTINGS_TEMPLATE: &str = r#"# burstwatch settings
#
# Every key is optional. Command line flags take precedence over this file.

# Glob pattern of access logs to scan. Files ending in .gz are decompressed.
log = "/var/log/nginx/access*.log*"

# Only lines containing this string are counted.
match = "wp-login.php"

# Only lines containing this status code (surrounded by spaces) are counted.
# Set to "" to count every status.
status = "200"

# Number of IPs to report.
limit = 10

# Window length, e.g. "30s", "10m", "1h".
period = "10m"

# "table" or "json"
format = "table"
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Fully resolved settings for a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSettings {
    pub log_pattern: String,
    pub needle: String,
    /// `None` counts every status code.
    pub status: Option<String>,
    pub limit: i64,
    pub period: Period,
    pub format: OutputFormat,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            log_pattern: DEFAULT_LOG_PATTERN.to_string(),
            needle: DEFAULT_NEEDLE.to_string(),
            status: Some(DEFAULT_STATUS.to_string()),
            limit: DEFAULT_LIMIT,
            period: Period::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ScanSettings {
    pub fn line_filter(&self) -> LineFilter {
        LineFilter::new(&self.needle, self.status.as_deref())
    }
}

/// Settings as written in an HCL file.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub log: Option<String>,
    #[serde(rename = "match")]
    pub needle: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub period: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Values given on the command line. They win over the settings file.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub log: Option<String>,
    pub needle: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub period: Option<Period>,
    pub format: Option<OutputFormat>,
}

pub fn load_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// Builds the settings for a scan: defaults, then the file at `config` (if any), then
/// `overrides`.
pub fn resolve_settings(
    config: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<ScanSettings, ConfigError> {
    let mut settings = ScanSettings::default();

    if let Some(path) = config {
        let file = load_settings_file(path)?;
        apply_file(&mut settings, file, path)?;
    }

    apply_overrides(&mut settings, overrides);
    Ok(settings)
}

pub fn apply_file(
    settings: &mut ScanSettings,
    file: SettingsFile,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(log) = file.log {
        settings.log_pattern = log;
    }
    if let Some(needle) = file.needle {
        settings.needle = needle;
    }
    if let Some(status) = file.status {
        settings.status = normalize_status(&status);
    }
    if let Some(limit) = file.limit {
        settings.limit = limit;
    }
    if let Some(period) = file.period {
        settings.period = period
            .parse()
            .map_err(|e| ConfigError::setting(path, "period", e))?;
    }
    if let Some(format) = file.format {
        settings.format = format;
    }
    Ok(())
}

pub fn apply_overrides(settings: &mut ScanSettings, overrides: &SettingsOverrides) {
    if let Some(log) = &overrides.log {
        settings.log_pattern.clone_from(log);
    }
    if let Some(needle) = &overrides.needle {
        settings.needle.clone_from(needle);
    }
    if let Some(status) = &overrides.status {
        settings.status = normalize_status(status);
    }
    if let Some(limit) = overrides.limit {
        settings.limit = limit;
    }
    if let Some(period) = overrides.period {
        settings.period = period;
    }
    if let Some(format) = overrides.format {
        settings.format = format;
    }
}

/// An empty status disables status filtering.
fn normalize_status(status: &str) -> Option<String> {
    let status = status.trim();
    (!status.is_empty()).then(|| status.to_string())
}
