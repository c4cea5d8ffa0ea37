use crate::burst::AccessEvent;
use crate::ingest::ScanError;
use crate::ingest::extract::{ExtractError, extract_event};
use crate::ingest::filter::LineFilter;
use crate::ingest::reader::{is_gzip, open_log};
use serde::Serialize;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to the lines of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files: u64,
    pub lines: u64,
    /// Lines that passed the filter.
    pub matched: u64,
    /// Matched lines with too few fields.
    pub malformed: u64,
    /// Matched lines whose timestamp did not parse.
    pub bad_timestamp: u64,
    /// Events handed to the caller.
    pub events: u64,
}

impl ScanStats {
    pub fn skipped(&self) -> u64 {
        self.malformed + self.bad_timestamp
    }

    fn merge(&mut self, other: &ScanStats) {
        self.files += other.files;
        self.lines += other.lines;
        self.matched += other.matched;
        self.malformed += other.malformed;
        self.bad_timestamp += other.bad_timestamp;
        self.events += other.events;
    }
}

/// Streams every matching event of `paths`, in path order then line order, into
/// `on_event`.
///
/// Any file that cannot be opened or read aborts the whole scan. Lines that fail the
/// filter or extraction are only counted.
pub fn scan<F>(
    paths: &[PathBuf],
    filter: &LineFilter,
    mut on_event: F,
) -> Result<ScanStats, ScanError>
where
    F: FnMut(AccessEvent),
{
    let mut stats = ScanStats::default();

    for path in paths {
        debug!(path = %path.display(), gzip = is_gzip(path), "scanning log file");

        let reader = open_log(path)?;
        let file_stats = scan_reader(reader, path, filter, &mut on_event)?;

        debug!(
            path = %path.display(),
            lines = file_stats.lines,
            matched = file_stats.matched,
            malformed = file_stats.malformed,
            bad_timestamp = file_stats.bad_timestamp,
            "finished log file"
        );

        stats.merge(&file_stats);
    }

    Ok(stats)
}

/// Scans a single already opened log. `path` is only used for error reporting.
pub fn scan_reader<R, F>(
    mut reader: R,
    path: &Path,
    filter: &LineFilter,
    on_event: &mut F,
) -> Result<ScanStats, ScanError>
where
    R: BufRead,
    F: FnMut(AccessEvent),
{
    let mut stats = ScanStats {
        files: 1,
        ..Default::default()
    };
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| ScanError::read(path, e))?;
        if n == 0 {
            break;
        }
        stats.lines += 1;

        // Logs are not guaranteed to be UTF-8.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if !filter.matches(line) {
            continue;
        }
        stats.matched += 1;

        match extract_event(line) {
            Ok(event) => {
                stats.events += 1;
                on_event(event);
            }
            Err(ExtractError::TooFewFields { .. }) => stats.malformed += 1,
            Err(ExtractError::Timestamp { .. }) => stats.bad_timestamp += 1,
        }
    }

    Ok(stats)
}

/// Like [`scan`], but materializes the events.
pub fn collect_events(
    paths: &[PathBuf],
    filter: &LineFilter,
) -> Result<(Vec<AccessEvent>, ScanStats), ScanError> {
    let mut events = Vec::new();
    let stats = scan(paths, filter, |event| events.push(event))?;
    Ok((events, stats))
}
