//! Logger setup.

use std::fs;
use std::fs::File;
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paths;

/// Install a file logger. Failures are reported on stderr and otherwise ignored.
pub fn init(log_file: Option<PathBuf>, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let Some(path) = log_file.or_else(paths::log_file) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Warning: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: failed to create log file {}: {}", path.display(), e),
    }
}
