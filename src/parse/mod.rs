#[allow(clippy::module_inception)]
mod parse;

pub use parse::{from_yaml, parser, LoggerConfig, DEFAULT_LOG_DIR, LOG_FILE_NAME};
