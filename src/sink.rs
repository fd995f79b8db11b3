use crate::error::LogError;
use crate::formatter::{ColoredFormatter, Formatter, PlainFormatter};
use crate::level::Level;
use crate::record::LogRecord;
use crate::rotation::RollingFile;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

/// A destination for formatted records.
pub trait Sink: Send + Sync {
    fn kind(&self) -> SinkKind;

    /// Records below this level are skipped by the sink.
    fn threshold(&self) -> Level;

    fn write_record(&self, record: &LogRecord) -> Result<(), LogError>;

    fn emit(&self, record: &LogRecord) -> Result<(), LogError> {
        if record.level() < self.threshold() {
            return Ok(());
        }
        self.write_record(record)
    }
}

// A writer panicking mid-line must not silence every later record.
fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    formatter: Box<dyn Formatter>,
    threshold: Level,
}

impl ConsoleSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        ConsoleSink {
            writer: Mutex::new(Box::new(writer)),
            formatter: Box::new(ColoredFormatter),
            threshold: Level::Debug,
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), LogError> {
        let mut line = self.formatter.format(record);
        line.push('\n');

        let mut writer = relock(&self.writer);
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| LogError::sink_io("console", e))
    }
}

/// Handle to a rolling file; loggers writing the same path share one.
pub type SharedRollingFile = Arc<RollingFile>;

pub struct FileSink {
    file: SharedRollingFile,
    formatter: Box<dyn Formatter>,
    threshold: Level,
}

impl FileSink {
    pub fn new(file: SharedRollingFile) -> Self {
        FileSink {
            file,
            formatter: Box::new(PlainFormatter),
            threshold: Level::Debug,
        }
    }

    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Sink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn write_record(&self, record: &LogRecord) -> Result<(), LogError> {
        let line = self.formatter.format(record);
        self.file.write_line(&line)
    }
}
