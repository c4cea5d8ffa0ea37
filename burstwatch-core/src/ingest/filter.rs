/// Selects the log lines worth counting.
///
/// A line matches when it contains `needle` and, if a status is set, the status code
/// surrounded by single spaces (` 200 `), which is how it appears in combined log format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter {
    needle: String,
    status_token: Option<String>,
}

impl LineFilter {
    pub fn new(needle: impl Into<String>, status: Option<&str>) -> Self {
        Self {
            needle: needle.into(),
            status_token: status.map(|s| format!(" {s} ")),
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.needle.as_str())
            && self
                .status_token
                .as_deref()
                .is_none_or(|token| line.contains(token))
    }
}
