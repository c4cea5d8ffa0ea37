//! Access Log Ingest
//!
//! Everything between a glob pattern on disk and a stream of [`AccessEvent`]s.
//!
//! Files are discovered with a glob, opened (and gunzipped when they end in `.gz`), read
//! line by line, filtered on a substring and a status code, and finally reduced to the
//! client address plus the request timestamp.
//!
//! Lines that don't make it through are counted in [`ScanStats`] and otherwise ignored.
//! Only problems with the files themselves abort a scan.
//!
//! [`AccessEvent`]: crate::burst::AccessEvent

mod discover;
mod error;
mod extract;
mod filter;
mod reader;
mod scan;

#[cfg(test)]
mod tests;

pub use discover::discover;
pub use error::ScanError;
pub use extract::{ExtractError, TIMESTAMP_FORMAT, extract_event};
pub use filter::LineFilter;
pub use reader::{is_gzip, open_log};
pub use scan::{ScanStats, collect_events, scan, scan_reader};
