use chrono::{Local, TimeZone};
use prettylog::level::RESET;
use prettylog::{ColorMap, ColoredFormatter, Formatter, Level, LogRecord, PlainFormatter};

const YELLOW: &str = "\x1b[93m";
const GRAY: &str = "\x1b[90m";

fn record(level: Level) -> LogRecord {
    let ts = Local.with_ymd_and_hms(2024, 3, 1, 14, 2, 3).unwrap();
    LogRecord::new(ts, level, "/srv/app/src/billing.rs", 88, "invoice sent")
}

#[test]
fn test_every_level_carries_its_style_and_reset() {
    for level in Level::ALL {
        let line = ColoredFormatter.format(&record(level));
        let style = ColorMap::style(level);

        let styled_level = format!("{style}{:<8}{RESET}", level.as_str());
        assert!(line.contains(&styled_level), "{level}: {line:?}");
        assert!(line.contains(&format!("{style}invoice sent{RESET}")));
        assert!(line.ends_with(RESET));
    }
}

#[test]
fn test_segments_are_individually_reset() {
    let line = ColoredFormatter.format(&record(Level::Debug));
    assert!(line.starts_with(&format!("{YELLOW}2024-03-01 14:02:03{RESET} ")));
    assert!(line.contains(&format!("{GRAY}[billing.rs:88]{RESET} ")));
    assert_eq!(line.matches(RESET).count(), 4);
}

#[test]
fn test_plain_and_colored_share_layout() {
    let rec = record(Level::Warning);
    let plain = PlainFormatter.format(&rec);
    let colored = ColoredFormatter.format(&rec);

    assert_eq!(plain, "2024-03-01 14:02:03 [billing.rs:88] WARNING  - invoice sent");

    let stripped = colored
        .replace(RESET, "")
        .replace(YELLOW, "")
        .replace(GRAY, "");
    assert_eq!(stripped, plain);
}

#[test]
fn test_formatting_leaves_record_intact() {
    let rec = record(Level::Error).with_trace("boom");
    let _ = ColoredFormatter.format(&rec);
    let _ = PlainFormatter.format(&rec);
    assert_eq!(rec.message(), "invoice sent");
    assert_eq!(rec.trace(), Some("boom"));
    assert_eq!(rec.formatted_time(), "2024-03-01 14:02:03");
}
