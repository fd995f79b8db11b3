use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while provisioning a logger or writing a record.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log directory could not be created.
    #[error("cannot create log directory `{}`: {source}", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sink failed to open, write or rotate its target.
    #[error("log sink `{sink}` failed: {source}")]
    SinkIo {
        sink: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read logging config `{}`: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid logging config `{}`: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    SubscriberInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl LogError {
    pub(crate) fn sink_io(sink: impl Into<String>, source: io::Error) -> Self {
        LogError::SinkIo {
            sink: sink.into(),
            source,
        }
    }
}
