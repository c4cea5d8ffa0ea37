use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read settings file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {path} already exists")]
    AlreadyExists { path: PathBuf },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("invalid `{key}` in {path}: {source}")]
    Setting {
        path: PathBuf,
        key: &'static str,
        #[source]
        source: Box<ConfigError>,
    },

    // Period
    #[error("invalid period '{value}': {source}")]
    InvalidPeriod {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("period must be greater than zero")]
    ZeroPeriod,

    #[error("period {period} is longer than one year")]
    PeriodTooLarge { period: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn setting(path: impl Into<PathBuf>, key: &'static str, source: ConfigError) -> Self {
        Self::Setting {
            path: path.into(),
            key,
            source: Box::new(source),
        }
    }
}
