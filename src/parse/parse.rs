use crate::error::LogError;
use crate::rotation::RotationPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "applog.log";

fn default_log_dir() -> PathBuf { PathBuf::from(DEFAULT_LOG_DIR) }
fn default_retention_days() -> usize { 30 }


/// Parameters a logger is provisioned with.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Rotated files kept next to the live one; `0` keeps them all.
    #[serde(default = "default_retention_days")]
    pub retention_days: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            log_dir: default_log_dir(),
            retention_days: default_retention_days(),
        }
    }
}

impl LoggerConfig {
    pub fn new(log_dir: impl Into<PathBuf>, retention_days: usize) -> Self {
        LoggerConfig {
            log_dir: log_dir.into(),
            retention_days,
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn rotation(&self) -> RotationPolicy {
        RotationPolicy::daily(self.retention_days)
    }
}



/*
    @@@
    @parser();
    . Reads a logging config file (YAML) into a String. I/O errors come back as LogError::ConfigRead.
    . Hands the text to serde_yaml; absent keys take their defaults, unknown keys and malformed YAML are LogError::ConfigParse.
*/
pub fn parser(path: impl AsRef<Path>) -> Result<LoggerConfig, LogError> {
    let path = path.as_ref();
    let yaml_file = fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml(&yaml_file).map_err(|source| LogError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn from_yaml(text: &str) -> Result<LoggerConfig, serde_yaml::Error> {
    // an empty document means "all defaults"
    if text.trim().is_empty() {
        return Ok(LoggerConfig::default());
    }
    serde_yaml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.log_dir, PathBuf::from("logs"));
        assert_eq!(cfg.retention_days, 30);
        assert_eq!(cfg.log_file(), PathBuf::from("logs").join("applog.log"));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg = from_yaml("retention_days: 7\n").unwrap();
        assert_eq!(cfg.retention_days, 7);
        assert_eq!(cfg.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(from_yaml("  \n").unwrap(), LoggerConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(from_yaml("retention: 7\n").is_err());
        assert!(from_yaml("interval_days: 2\n").is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = parser("does/not/exist.yml").unwrap_err();
        assert!(matches!(err, LogError::ConfigRead { .. }));
    }
}
