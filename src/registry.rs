use crate::error::LogError;
use crate::level::Level;
use crate::logger::Logger;
use crate::parse::LoggerConfig;
use crate::rotation::{Clock, RollingFile, SystemClock};
use crate::sink::{ConsoleSink, FileSink, SharedRollingFile};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{debug, trace};

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

#[derive(Default)]
struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    files: HashMap<PathBuf, SharedRollingFile>,
}

/// Identity -> configured logger, filled by [`LoggerRegistry::provision`] and never cleared.
///
/// The process-wide instance behind [`get_logger`] is created on first use.
/// Separate instances are useful for tests and for injecting a [`Clock`].
pub struct LoggerRegistry {
    clock: Arc<dyn Clock>,
    state: Mutex<RegistryState>,
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        LoggerRegistry {
            clock,
            state: Mutex::new(RegistryState::default()),
        }
    }

    pub fn global() -> &'static LoggerRegistry {
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    pub fn get(&self, identity: &str) -> Option<Arc<Logger>> {
        self.lock().loggers.get(identity).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Console output goes to stdout.
    pub fn provision(&self, identity: &str, config: &LoggerConfig) -> Result<Arc<Logger>, LogError> {
        self.provision_to(identity, config, io::stdout())
    }

    /*
        @@@
        @provision_to();
        . Returns the logger already registered under `identity` untouched, so repeated calls never stack sinks.
        . Otherwise creates the log directory, attaches a colored console sink on `console` and a rolling file sink on <log_dir>/applog.log, both at DEBUG.
        . Loggers whose log file resolves to the same path share one rolling file, so only one of them ever rotates it.
        . The registry lock is held throughout; two threads provisioning the same identity still get one logger.
    */
    pub fn provision_to(
        &self,
        identity: &str,
        config: &LoggerConfig,
        console: impl Write + Send + 'static,
    ) -> Result<Arc<Logger>, LogError> {
        let mut state = self.lock();

        if let Some(existing) = state.loggers.get(identity) {
            trace!(identity, "logger already provisioned");
            return Ok(Arc::clone(existing));
        }

        ensure_dir(&config.log_dir)?;
        let log_file = resolve(&config.log_dir).join(crate::parse::LOG_FILE_NAME);

        let shared = match state.files.get(&log_file) {
            Some(file) => Arc::clone(file),
            None => {
                let file = Arc::new(RollingFile::open(&log_file, config.rotation())?);
                state.files.insert(log_file.clone(), Arc::clone(&file));
                file
            }
        };

        let logger = Logger::new(identity, Arc::clone(&self.clock))
            .with_sink(ConsoleSink::new(console).with_threshold(Level::Debug))
            .with_sink(FileSink::new(shared).with_threshold(Level::Debug))
            .with_threshold(Level::Debug);
        let logger = Arc::new(logger);
        state.loggers.insert(identity.to_owned(), Arc::clone(&logger));

        debug!(
            identity,
            log_file = %log_file.display(),
            retention = config.retention_days,
            "provisioned logger"
        );
        Ok(logger)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// create_dir_all already treats an existing directory as success
fn ensure_dir(dir: &Path) -> Result<(), LogError> {
    fs::create_dir_all(dir).map_err(|source| LogError::Configuration {
        path: dir.to_path_buf(),
        source,
    })
}

fn resolve(dir: &Path) -> PathBuf {
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// Identity of the source file that called this function: its name without extension.
#[track_caller]
pub fn caller_identity() -> String {
    identity_from_path(Location::caller().file())
}

/// `src/worker.rs` -> `worker`; `src/jobs/mod.rs` -> `jobs`.
pub fn identity_from_path(path: &str) -> String {
    let path = Path::new(path);
    let stem = path.file_stem().and_then(|s| s.to_str());
    match stem {
        Some("mod") => path
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
            .unwrap_or("mod")
            .to_owned(),
        Some(stem) => stem.to_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Logger for the calling source file with default settings (`logs/`, 30 rotated files).
#[track_caller]
pub fn get_logger() -> Result<Arc<Logger>, LogError> {
    get_logger_with(&LoggerConfig::default())
}

#[track_caller]
pub fn get_logger_with(config: &LoggerConfig) -> Result<Arc<Logger>, LogError> {
    let identity = caller_identity();
    LoggerRegistry::global().provision(&identity, config)
}

pub fn provision(identity: &str, config: &LoggerConfig) -> Result<Arc<Logger>, LogError> {
    LoggerRegistry::global().provision(identity, config)
}
