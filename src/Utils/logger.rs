use crate::numerical::errors::ComputationError;
use chrono::Local;
use log::{LevelFilter, info};
use simplelog::*;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// "debug", "info", "warn", "error" or "off"
pub fn level_from_name(name: &str) -> Result<LevelFilter, ComputationError> {
    match name.to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(ComputationError::InvalidParameter(format!(
            "loglevel must be debug, info, warn, error or off, got '{}'",
            name
        ))),
    }
}

/// log_<date>_<time>.txt
pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Terminal logger plus, when `log_dir` is given, a file logger writing into that directory.
/// Returns the path of the log file. Calling it again once a logger is set changes nothing.
pub fn init_logger(level: LevelFilter, log_dir: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let mut log_path = None;
    if let Some(dir) = log_dir {
        let path = dir.join(log_file_name());
        let file = File::create(&path)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
        log_path = Some(path);
    }
    // Err means a logger is already set
    if CombinedLogger::init(loggers).is_ok() {
        info!("Program started with loglevel: {}", level);
    }
    Ok(log_path)
}
