use crate::error::LogError;
use chrono::{DateTime, Local};
use flexi_logger::writers::FileLogWriter;
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, Naming, WriteMode};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

/// Source of wall-clock time for record timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Length of one log file's period, measured in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPeriod {
    Day,
    Hour,
    Minute,
    Second,
}

impl RotationPeriod {
    fn age(self) -> Age {
        match self {
            RotationPeriod::Day => Age::Day,
            RotationPeriod::Hour => Age::Hour,
            RotationPeriod::Minute => Age::Minute,
            RotationPeriod::Second => Age::Second,
        }
    }
}

/// When a [`RollingFile`] rolls over and how many old files it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub period: RotationPeriod,
    /// Rotated files to keep. `0` keeps all of them.
    pub retention: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::daily(30)
    }
}

impl RotationPolicy {
    /// Roll at local midnight, keep `retention` rotated files.
    pub fn daily(retention: usize) -> Self {
        RotationPolicy {
            period: RotationPeriod::Day,
            retention,
        }
    }

    fn criterion(&self) -> Criterion {
        Criterion::Age(self.period.age())
    }

    fn cleanup(&self) -> Cleanup {
        match self.retention {
            0 => Cleanup::Never,
            keep => Cleanup::KeepLogFiles(keep),
        }
    }
}

/*
    @@@
    @RollingFile;
    . Append-mode log file backed by flexi_logger's FileLogWriter, which checks the rollover before every write.
    . The live file keeps its name (applog.log); rotated files get a numbered infix (applog_r00000.log, ...).
    . Rotation happens on local-time period boundaries; rotated files beyond `retention` are removed oldest first, on the writing thread.
    . The writer serializes concurrent writes internally, so rollover and write never interleave.
*/
pub struct RollingFile {
    path: PathBuf,
    writer: FileLogWriter,
}

impl RollingFile {
    pub fn open(path: impl Into<PathBuf>, policy: RotationPolicy) -> Result<Self, LogError> {
        let path = path.into();
        let sink_name = path.display().to_string();

        // FileLogWriter opens lazily; a path that cannot take appends must fail here, not on the first record
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::sink_io(&sink_name, e))?;

        let writer = FileLogWriter::builder(file_spec(&path))
            .rotate(policy.criterion(), Naming::NumbersDirect, policy.cleanup())
            .cleanup_in_background_thread(false)
            .write_mode(WriteMode::Direct)
            .append()
            .try_build()
            .map_err(|e| LogError::sink_io(&sink_name, io::Error::other(e.to_string())))?;

        Ok(RollingFile { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `text` plus a newline, rolling the file first if its period is over.
    pub fn write_line(&self, text: &str) -> Result<(), LogError> {
        let mut buf = String::with_capacity(text.len() + 1);
        buf.push_str(text);
        buf.push('\n');
        self.writer
            .plain_write(buf.as_bytes())
            .map(|_| ())
            .map_err(|e| LogError::sink_io(self.path.display().to_string(), e))
    }
}

fn file_spec(path: &Path) -> FileSpec {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let basename = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    FileSpec::default()
        .directory(dir)
        .basename(basename)
        .suffix(suffix)
        .suppress_timestamp()
}
