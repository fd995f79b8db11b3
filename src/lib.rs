/* src/lib.rs */

//! Colorized console logging plus a daily-rotating plain-text log file,
//! provisioned once per calling module.
//!
//! ```no_run
//! let log = prettylog::get_logger()?;
//! log.info("started")?;
//! # Ok::<(), prettylog::LogError>(())
//! ```

pub mod bridge;
pub mod error;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod parse;
pub mod record;
pub mod registry;
pub mod rotation;
pub mod sink;

pub use bridge::{install_global, LoggerLayer};
pub use error::LogError;
pub use formatter::{ColoredFormatter, Formatter, PlainFormatter};
pub use level::{ColorMap, Level};
pub use logger::Logger;
pub use parse::{parser, LoggerConfig};
pub use record::LogRecord;
pub use registry::{
    caller_identity, get_logger, get_logger_with, identity_from_path, provision, LoggerRegistry,
};
pub use rotation::{Clock, RollingFile, RotationPeriod, RotationPolicy, SystemClock};
pub use sink::{ConsoleSink, FileSink, Sink, SinkKind};
