//! Execution contexts
//!
//! Hotkey registration and the tray loop each need a specific thread. The
//! bootstrap asks for them explicitly instead of relying on a shared pool.

use std::fmt::Display;
use std::thread::{self, JoinHandle};

use log::error;

/// Run `f` on a new named OS thread.
///
/// The handle may be dropped; the thread then lives until it returns or the
/// process exits.
pub fn spawn_dedicated<F>(name: &str, f: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new().name(name.to_string()).spawn(f)
}

/// Log `err` and terminate the whole process with status 1.
///
/// Used by background contexts whose failure leaves the utility useless.
pub fn abort_process(err: impl Display) -> ! {
    error!("Fatal: {err}");
    std::process::exit(1);
}
