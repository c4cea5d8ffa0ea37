use burstwatch_core::conf::ScanSettings;
use chrono::{DateTime, TimeZone, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 2024-10-10 at the given wall clock time, UTC.
pub fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 10, hour, min, sec).unwrap()
}

/// A combined log format line.
pub fn access_line(ip: &str, ts: DateTime<Utc>, path: &str, status: u16) -> String {
    format!(
        "{ip} - - [{} +0000] \"POST {path} HTTP/1.1\" {status} 1043 \"-\" \"Mozilla/5.0\"",
        ts.format("%d/%b/%Y:%H:%M:%S")
    )
}

/// A throwaway log directory.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, lines.join("\n") + "\n").unwrap();
        path
    }

    pub fn write_gz(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.path().join(name);
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all((lines.join("\n") + "\n").as_bytes()).unwrap();
        fs::write(&path, enc.finish().unwrap()).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    pub fn pattern(&self, glob: &str) -> String {
        self.path().join(glob).to_string_lossy().into_owned()
    }

    /// Default settings pointed at `glob` inside this directory.
    pub fn settings(&self, glob: &str) -> ScanSettings {
        ScanSettings {
            log_pattern: self.pattern(glob),
            ..Default::default()
        }
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
