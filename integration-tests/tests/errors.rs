use burstwatch_core::cli::scan::build_report;
use burstwatch_core::conf::{ConfigError, SettingsOverrides, resolve_settings};
use burstwatch_core::ingest::ScanError;
use integration_tests::harness::{LogDir, access_line, at};

#[test]
fn invalid_glob_aborts_the_run() {
    let logs = LogDir::new();

    let err = build_report(&logs.settings("[")).unwrap_err();

    assert!(matches!(err, ScanError::Glob { .. }), "{err:?}");
}

#[test]
fn corrupt_gzip_aborts_the_run_and_names_the_file() {
    // Arrange
    let logs = LogDir::new();
    logs.write(
        "access.log",
        &[access_line("A", at(10, 0, 0), "/wp-admin/", 200)],
    );
    let bad = logs.write_bytes("access.log.2.gz", b"not gzip at all");

    // Act
    let err = build_report(&logs.settings("access.log*")).unwrap_err();

    // Assert
    assert!(matches!(err, ScanError::Read { .. }), "{err:?}");
    assert_eq!(err.path(), Some(bad.as_path()));
    assert!(err.to_string().contains("access.log.2.gz"), "{err}");
}

#[test]
fn unreadable_settings_file_is_reported_with_its_path() {
    let logs = LogDir::new();
    let path = logs.path().join("missing.hcl");

    let err = resolve_settings(Some(&path), &SettingsOverrides::default()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }), "{err:?}");
    assert!(err.to_string().contains("missing.hcl"), "{err}");
}

#[test]
fn settings_file_drives_the_scan() {
    // Arrange
    let logs = LogDir::new();
    logs.write(
        "access.log",
        &[
            access_line("A", at(10, 0, 0), "/xmlrpc.php", 403),
            access_line("A", at(10, 40, 0), "/xmlrpc.php", 403),
            access_line("B", at(10, 0, 0), "/xmlrpc.php", 200),
        ],
    );
    let config = logs.path().join("burstwatch.hcl");
    std::fs::write(
        &config,
        format!(
            "log = \"{}\"\nmatch = \"xmlrpc.php\"\nstatus = \"403\"\nperiod = \"1h\"\n",
            logs.pattern("*.log")
        ),
    )
    .unwrap();

    // Act
    let settings = resolve_settings(Some(&config), &SettingsOverrides::default()).unwrap();
    let report = build_report(&settings).unwrap();

    // Assert
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].ip, "A");
    assert_eq!(report.records[0].count, 2);
    assert_eq!(report.records[0].window_start, at(10, 0, 0));
    assert_eq!(report.records[0].window_end, at(11, 0, 0));
}
