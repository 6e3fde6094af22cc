use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter (`env_logger` syntax)
pub const LOG_ENV: &str = "LAUNCHER_LOG";

/// Log file name under the temp dir, used when stderr is detached
pub const LOG_FILE: &str = "simple-launcher.log";

/// Release builds on Windows run under the GUI subsystem and have no stderr.
const STDERR_DETACHED: bool = cfg!(all(windows, not(debug_assertions)));

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Install the logger; defaults to `info` when `LAUNCHER_LOG` is unset.
///
/// Writes to stderr, or appends to [`log_file_path`] where stderr is detached.
pub fn init() {
    let file = if STDERR_DETACHED {
        // Nowhere to report a failure; fall back to the (lost) stderr
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path())
            .ok()
    } else {
        None
    };
    builder(file).init();
}

fn builder(file: Option<File>) -> Builder {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, "info"));
    builder.format_target(false);
    if let Some(file) = file {
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder
}
