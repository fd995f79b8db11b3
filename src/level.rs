use colored::Color;
use std::fmt;

/// Severity of a record, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

// `pad` so that `{:<8}` lines the level column up.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// tracing has no CRITICAL and an extra TRACE; TRACE folds into DEBUG.
impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Start code for `color` in the foreground, optionally bold.
pub fn start_code(color: Color, bold: bool) -> String {
    let weight = if bold { BOLD } else { "" };
    format!("{weight}\x1b[{}m", color.to_fg_str())
}

/// `text` between the start code for `color` and [`RESET`].
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{text}{RESET}", start_code(color, false))
}

/*
    @@@
    @ColorMap;
    . Fixed level -> (color, bold) table, indexed by the `Level` discriminant.
    . Timestamps are always bright yellow, source locations gray, traces bright red.
*/
pub struct ColorMap;

impl ColorMap {
    const LEVELS: [(Color, bool); 5] = [
        (Color::BrightCyan, false),
        (Color::BrightGreen, false),
        (Color::BrightYellow, false),
        (Color::BrightRed, false),
        (Color::BrightMagenta, true),
    ];

    pub const TIMESTAMP: Color = Color::BrightYellow;
    pub const LOCATION: Color = Color::BrightBlack;
    pub const TRACE: Color = Color::BrightRed;

    pub fn style(level: Level) -> String {
        let (color, bold) = Self::LEVELS[level as usize];
        start_code(color, bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn display_pads_to_width() {
        assert_eq!(format!("{:<8}|", Level::Info), "INFO    |");
        assert_eq!(format!("{:<8}|", Level::Critical), "CRITICAL|");
    }

    #[test]
    fn styles_use_the_bright_ansi_codes() {
        assert_eq!(ColorMap::style(Level::Debug), "\x1b[96m");
        assert_eq!(ColorMap::style(Level::Info), "\x1b[92m");
        assert_eq!(ColorMap::style(Level::Warning), "\x1b[93m");
        assert_eq!(ColorMap::style(Level::Error), "\x1b[91m");
        assert_eq!(ColorMap::style(Level::Critical), "\x1b[1m\x1b[95m");
    }

    #[test]
    fn paint_closes_with_reset() {
        assert_eq!(paint("[a.rs:1]", ColorMap::LOCATION), "\x1b[90m[a.rs:1]\x1b[0m");
    }

    #[test]
    fn trace_folds_into_debug() {
        assert_eq!(Level::from(tracing::Level::TRACE), Level::Debug);
        assert_eq!(Level::from(tracing::Level::WARN), Level::Warning);
    }
}
