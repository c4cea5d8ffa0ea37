use super::access_line;
use crate::burst::{AccessEvent, Period, WindowAggregator};
use crate::ingest::{LineFilter, ScanError, ScanStats, collect_events, scan_reader};
use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::tempdir;

fn wp_login() -> LineFilter {
    LineFilter::new("wp-login.php", Some("200"))
}

fn write_gz(path: &Path, body: &str) {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(body.as_bytes()).unwrap();
    fs::write(path, enc.finish().unwrap()).unwrap();
}

#[test]
fn counts_every_outcome() {
    // Arrange
    let body = [
        access_line("1.1.1.1", "10/Oct/2024:13:55:36", "/wp-login.php", 200),
        access_line("1.1.1.1", "10/Oct/2024:13:55:37", "/wp-login.php", 404),
        access_line("2.2.2.2", "10/Oct/2024:13:55:38", "/", 200),
        "3.3.3.3 wp-login.php 200 ".to_string(),
        "4.4.4.4 - - [not-a-date] \"POST /wp-login.php\" 200 0".to_string(),
        access_line("5.5.5.5", "10/Oct/2024:13:56:00", "/wp-login.php", 200),
    ]
    .join("\n");

    // Act
    let mut ips = Vec::new();
    let stats = scan_reader(
        Cursor::new(body),
        Path::new("access.log"),
        &wp_login(),
        &mut |e: AccessEvent| ips.push(e.ip),
    )
    .unwrap();

    // Assert
    assert_eq!(ips, vec!["1.1.1.1", "5.5.5.5"]);
    assert_eq!(
        stats,
        ScanStats {
            files: 1,
            lines: 6,
            matched: 4,
            malformed: 1,
            bad_timestamp: 1,
            events: 2,
        }
    );
    assert_eq!(stats.skipped(), 2);
}

#[test]
fn handles_crlf_and_invalid_utf8() {
    let mut body = access_line("1.1.1.1", "10/Oct/2024:13:55:36", "/wp-login.php", 200).into_bytes();
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(b"\xff\xfe garbage wp-login.php 200 \r\n");
    body.extend_from_slice(
        access_line("2.2.2.2", "10/Oct/2024:13:55:36", "/wp-login.php?\u{e9}", 200).as_bytes(),
    );

    let mut ips = Vec::new();
    let stats = scan_reader(
        Cursor::new(body),
        Path::new("access.log"),
        &wp_login(),
        &mut |e: AccessEvent| ips.push(e.ip),
    )
    .unwrap();

    assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2"]);
    assert_eq!(stats.malformed, 1);
}

#[test]
fn reads_plain_and_gzip_files_in_path_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    let plain = root.join("access.log");
    let rotated = root.join("access.log.1.gz");

    fs::write(
        &plain,
        access_line("1.1.1.1", "10/Oct/2024:14:00:00", "/wp-login.php", 200),
    )
    .unwrap();
    write_gz(
        &rotated,
        &[
            access_line("2.2.2.2", "10/Oct/2024:13:00:00", "/wp-login.php", 200),
            access_line("3.3.3.3", "10/Oct/2024:13:00:01", "/wp-login.php", 200),
        ]
        .join("\n"),
    );

    // Act
    let (events, stats) = collect_events(&[plain, rotated], &wp_login()).unwrap();

    // Assert
    let ips: Vec<_> = events.iter().map(|e| e.ip.as_str()).collect();
    assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2", "3.3.3.3"]);
    assert_eq!(stats.files, 2);
    assert_eq!(stats.events, 3);
}

#[test]
fn decodes_concatenated_gzip_members() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.gz");

    let mut bytes = Vec::new();
    for ip in ["1.1.1.1", "2.2.2.2"] {
        let mut enc = GzEncoder::new(Vec::new(), Compression::fast());
        let line = access_line(ip, "10/Oct/2024:13:00:00", "/wp-login.php", 200) + "\n";
        enc.write_all(line.as_bytes()).unwrap();
        bytes.extend(enc.finish().unwrap());
    }
    fs::write(&path, bytes).unwrap();

    let (events, _) = collect_events(&[path], &wp_login()).unwrap();

    assert_eq!(events.len(), 2);
}

#[test]
fn missing_file_aborts_with_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.log");

    let err = collect_events(&[path.clone()], &wp_login()).unwrap_err();

    assert!(matches!(err, ScanError::Open { .. }), "{err:?}");
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn corrupt_gzip_aborts_the_scan() {
    // Arrange
    let dir = tempdir().unwrap();
    let good = dir.path().join("a.log");
    let bad = dir.path().join("b.log.gz");

    fs::write(
        &good,
        access_line("1.1.1.1", "10/Oct/2024:13:00:00", "/wp-login.php", 200),
    )
    .unwrap();
    fs::write(&bad, b"definitely not gzip").unwrap();

    // Act
    let err = collect_events(&[good, bad.clone()], &wp_login()).unwrap_err();

    // Assert
    assert!(matches!(err, ScanError::Read { .. }), "{err:?}");
    assert_eq!(err.path(), Some(bad.as_path()));
    assert!(err.to_string().contains("b.log.gz"));
}

#[test]
fn far_future_timestamp_is_skipped_not_aggregated() {
    // Arrange
    let body = [
        access_line("6.6.6.6", "31/Dec/+262142:23:59:59", "/wp-login.php", 200),
        access_line("7.7.7.7", "10/Oct/2024:13:55:36", "/wp-login.php", 200),
    ]
    .join("\n");
    let mut aggregator = WindowAggregator::new(Period::default());

    // Act
    let stats = scan_reader(
        Cursor::new(body),
        Path::new("access.log"),
        &wp_login(),
        &mut |e: AccessEvent| aggregator.push(&e),
    )
    .unwrap();

    // Assert
    assert_eq!(stats.bad_timestamp, 1);
    assert_eq!(stats.events, 1);

    let agg = aggregator.finish();
    assert_eq!(agg.best_per_ip.len(), 1);
    assert!(agg.best_per_ip.contains_key("7.7.7.7"));
}
