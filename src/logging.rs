//! File logging through log4rs.
//!
//! The terminal is in raw mode on the alternate screen while playing, so log
//! records go to a file instead of stderr.

use std::path::Path;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open log file: {0}")]
    Appender(#[from] std::io::Error),
    #[error("invalid log configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Installs a file logger at `level`, appending to `path`.
pub fn init_log(level: LevelFilter, path: &Path) -> Result<(), LogError> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;

    let _handle = log4rs::init_config(config)?;
    Ok(())
}
