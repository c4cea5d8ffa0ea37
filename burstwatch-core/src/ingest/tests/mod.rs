mod scan_tests;

use std::path::Path;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------

/// A combined log format line for `ip` at `ts` (`dd/Mon/yyyy:HH:MM:SS`).
fn access_line(ip: &str, ts: &str, path: &str, status: u16) -> String {
    format!(
        "{ip} - - [{ts} +0000] \"POST {path} HTTP/1.1\" {status} 512 \"-\" \"curl/8.5.0\""
    )
}

fn pattern(root: &Path, glob: &str) -> String {
    root.join(glob).to_string_lossy().into_owned()
}
