use crate::level::{paint, ColorMap, RESET};
use crate::record::LogRecord;

/// Turns a record into the text a sink writes, without the trailing newline.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

/*
    @@@
    @ColoredFormatter;
    . <yellow date> <gray [file:line]> <LEVEL padded to 8> - <message>, level and message in the level color.
    . Every segment closes with RESET so styles never bleed into the next one.
    . A trace, when present, follows on the next lines wrapped in red.
*/
#[derive(Debug, Default, Clone, Copy)]
pub struct ColoredFormatter;

impl Formatter for ColoredFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let color = ColorMap::style(record.level());

        let mut out = format!(
            "{date} {location} {color}{level:<8}{RESET} - {color}{message}{RESET}",
            date = paint(record.formatted_time(), ColorMap::TIMESTAMP),
            location = paint(
                &format!("[{}:{}]", record.file(), record.line()),
                ColorMap::LOCATION
            ),
            level = record.level(),
            message = record.message(),
        );

        if let Some(trace) = record.trace() {
            out.push('\n');
            out.push_str(&paint(trace, ColorMap::TRACE));
        }
        out
    }
}

/// Same layout as [`ColoredFormatter`] with no escape codes, for files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut out = format!(
            "{} [{}:{}] {:<8} - {}",
            record.formatted_time(),
            record.file(),
            record.line(),
            record.level(),
            record.message(),
        );
        if let Some(trace) = record.trace() {
            out.push('\n');
            out.push_str(trace);
        }
        out
    }
}
