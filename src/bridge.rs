use crate::error::LogError;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::{render_error_chain, LogRecord};
use std::error::Error;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Routes `tracing` events into a provisioned [`Logger`].
///
/// The record keeps the event's own call site, the `message` field becomes the
/// message, other fields are appended as `name=value`, and an error-typed field
/// becomes the trace block.
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        LoggerLayer { logger }
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let level = Level::from(*meta.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let trace = visitor.trace.take();

        let mut record = LogRecord::new(
            self.logger.now(),
            level,
            meta.file().unwrap_or("<unknown>"),
            meta.line().unwrap_or(0),
            visitor.message(),
        );
        if let Some(trace) = trace {
            record = record.with_trace(trace);
        }

        // a layer has nowhere to return the error to
        if let Err(e) = self.logger.log_record(&record) {
            eprintln!("prettylog: dropped tracing event: {e}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
    trace: Option<String>,
}

impl EventVisitor {
    fn message(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        self.trace = Some(render_error_chain(value));
        self.push_field(field.name(), format_args!("{value}"));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}

/*
    @@@
    @install_global();
    . Makes `logger` the sink for every tracing event in the process, at DEBUG and above.
    . Fails with LogError::SubscriberInstalled if a global subscriber is already set, instead of panicking.
*/
pub fn install_global(logger: Arc<Logger>) -> Result<(), LogError> {
    let subscriber = tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .with(LevelFilter::DEBUG);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
