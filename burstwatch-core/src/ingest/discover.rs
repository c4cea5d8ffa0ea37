use crate::ingest::ScanError;
use glob::glob;
use std::path::PathBuf;

/// Discovers log files matching a glob pattern.
///
/// Searches the filesystem for every entry that matches `pattern` and returns the
/// regular files among them in sorted order. Matching directories are skipped.
/// Sorting fixes the order files are scanned in, which in turn fixes how ties between
/// equally busy windows are broken.
///
/// # Arguments
///
/// * `pattern` - A glob pattern string (e.g., `"/var/log/nginx/access*.log*"`)
///
/// # Returns
///
/// A sorted `Vec<PathBuf>`, empty when nothing matches.
///
/// # Errors
///
/// Returns `ScanError::Glob` if the pattern is malformed, and `ScanError::Discover` if a
/// directory on the way cannot be read.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let entries = glob(pattern).map_err(|e| ScanError::Glob {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ScanError::Discover {
            pattern: pattern.to_string(),
            source: e,
        })?;

        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
