use crate::ingest::ScanError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a log file for line reading, gunzipping it on the fly when it ends in `.gz`.
///
/// Rotated logs are often concatenated gzip members, so every member is decoded.
/// A corrupt gzip stream surfaces as a read error on the returned reader.
pub fn open_log(path: &Path) -> Result<Box<dyn BufRead>, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;

    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
