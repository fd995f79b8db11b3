use crate::level::Level;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fmt::Write as _;
use std::panic::Location;
use std::path::Path;
use std::sync::OnceLock;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log call, as seen by every sink it is dispatched to.
#[derive(Debug)]
pub struct LogRecord {
    timestamp: DateTime<Local>,
    level: Level,
    file: &'static str,
    line: u32,
    message: String,
    trace: Option<String>,
    asctime: OnceLock<String>,
}

impl LogRecord {
    /// `file` may be a full path; only its file name is kept.
    pub fn new(
        timestamp: DateTime<Local>,
        level: Level,
        file: &'static str,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        LogRecord {
            timestamp,
            level,
            file: file_name(file),
            line,
            message: message.into(),
            trace: None,
            asctime: OnceLock::new(),
        }
    }

    pub fn at_location(
        timestamp: DateTime<Local>,
        level: Level,
        location: &'static Location<'static>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(timestamp, level, location.file(), location.line(), message)
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// `YYYY-MM-DD HH:MM:SS`, formatted on first use and reused by later sinks.
    pub fn formatted_time(&self) -> &str {
        self.asctime
            .get_or_init(|| self.timestamp.format(TIMESTAMP_FORMAT).to_string())
    }
}

fn file_name(path: &'static str) -> &'static str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/*
    @@@
    @render_error_chain();
    . Renders an error and every `source()` behind it, outermost first.
    . This is the trace block attached to records logged through `exception`.
*/
pub fn render_error_chain<E>(error: &E) -> String
where
    E: Error + ?Sized,
{
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);
    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("request failed")
        }
    }
    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection reset")
        }
    }
    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }
    impl Error for Inner {}

    #[test]
    fn keeps_only_the_file_name() {
        let ts = Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let record = LogRecord::new(ts, Level::Info, "src/workers/queue.rs", 42, "hi");
        assert_eq!(record.file(), "queue.rs");
        assert_eq!(record.line(), 42);
    }

    #[test]
    fn formatted_time_is_cached() {
        let ts = Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap();
        let record = LogRecord::new(ts, Level::Info, "a.rs", 1, "hi");
        let first = record.formatted_time() as *const str;
        assert_eq!(record.formatted_time(), "2024-01-15 09:30:05");
        assert_eq!(first, record.formatted_time() as *const str);
    }

    #[test]
    fn error_chain_lists_sources() {
        let rendered = render_error_chain(&Outer(Inner));
        assert_eq!(rendered, "request failed\nCaused by: connection reset");
    }
}
