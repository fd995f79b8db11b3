use crate::error::LogError;
use crate::level::Level;
use crate::record::{render_error_chain, LogRecord};
use crate::rotation::Clock;
use crate::sink::{Sink, SinkKind};
use chrono::{DateTime, Local};
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// A provisioned logger: one identity, its own sinks, no parent.
///
/// Every emission call captures the caller's `file:line` through `#[track_caller]`.
pub struct Logger {
    identity: String,
    threshold: Level,
    sinks: Vec<Box<dyn Sink>>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("identity", &self.identity)
            .field("threshold", &self.threshold)
            .field("sinks", &self.sink_kinds())
            .finish()
    }
}

impl Logger {
    pub fn new(identity: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Logger {
            identity: identity.into(),
            threshold: Level::Debug,
            sinks: Vec::new(),
            clock,
        }
    }

    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn sinks(&self) -> &[Box<dyn Sink>] {
        &self.sinks
    }

    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.sinks.iter().map(|sink| sink.kind()).collect()
    }

    /// Current time according to the logger's clock.
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /*
        @@@
        @log_record();
        . Hands the record to every sink, even when an earlier one fails.
        . Returns the first sink error so a broken sink stays visible to the caller.
    */
    pub fn log_record(&self, record: &LogRecord) -> Result<(), LogError> {
        if !self.is_enabled(record.level()) {
            return Ok(());
        }

        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.emit(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) -> Result<(), LogError> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let record = self.record(level, Location::caller(), message.to_string());
        self.log_record(&record)
    }

    /// Logs `message` at `level` with `error` and its source chain as the trace.
    #[track_caller]
    pub fn log_exception<E>(
        &self,
        level: Level,
        message: impl fmt::Display,
        error: &E,
    ) -> Result<(), LogError>
    where
        E: Error + ?Sized,
    {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let record = self
            .record(level, Location::caller(), message.to_string())
            .with_trace(render_error_chain(error));
        self.log_record(&record)
    }

    fn record(
        &self,
        level: Level,
        location: &'static Location<'static>,
        message: String,
    ) -> LogRecord {
        LogRecord::at_location(self.now(), level, location, message)
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) -> Result<(), LogError> {
        self.log(Level::Debug, message)
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) -> Result<(), LogError> {
        self.log(Level::Info, message)
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) -> Result<(), LogError> {
        self.log(Level::Warning, message)
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) -> Result<(), LogError> {
        self.log(Level::Error, message)
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) -> Result<(), LogError> {
        self.log(Level::Critical, message)
    }

    /// ERROR-level record carrying the handled error as its trace.
    #[track_caller]
    pub fn exception<E>(&self, message: impl fmt::Display, error: &E) -> Result<(), LogError>
    where
        E: Error + ?Sized,
    {
        self.log_exception(Level::Error, message, error)
    }
}
