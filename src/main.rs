use anyhow::Context;
use prettylog::{get_logger_with, parser, LoggerConfig};
use std::path::Path;
use thiserror::Error;

const CONFIG_PATH: &str = "config/logging.yml";

#[derive(Debug, Error)]
#[error("division by zero")]
struct DivisionByZero;

fn divide(a: i64, b: i64) -> Result<i64, DivisionByZero> {
    a.checked_div(b).ok_or(DivisionByZero)
}

fn main() -> anyhow::Result<()> {
    let cfg = if Path::new(CONFIG_PATH).exists() {
        parser(CONFIG_PATH)?
    } else {
        LoggerConfig::default()
    };
    let logger = get_logger_with(&cfg).context("failed to set up logging")?;

    println!("=== Testing all log levels ===\n");

    logger.debug("This is a DEBUG message (Cyan).")?;
    logger.info("This is an INFO message (Green).")?;
    logger.warning("This is a WARNING message (Yellow).")?;
    logger.error("This is an ERROR message (Red).")?;
    logger.critical("This is a CRITICAL message (Bold Magenta).")?;

    println!("\n=== Testing exception logging ===\n");

    if let Err(e) = divide(1, 0) {
        logger.exception("An exception occurred!", &e)?;
    }

    println!("\nLogs saved to: {}", cfg.log_file().display());
    Ok(())
}
