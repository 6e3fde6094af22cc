//! Application wiring shared by every platform backend
//!
//! - `on_ready`: configure the tray session and start the quit coordinator
//! - `on_exit`: final log line before the tray loop returns
//! - `run_hotkey_loop`: body of the hotkey context

use log::info;

use crate::config::LauncherConfig;
use crate::error::{HotkeyError, TrayError};
use crate::hotkey::{HotkeyCombo, HotkeyListener, HotkeyLoop};
use crate::tray::{Tray, spawn_quit_coordinator};

/// Configure a freshly shown tray: icon, title, tooltip and the Quit item.
pub fn on_ready(tray: &mut dyn Tray, config: &LauncherConfig, icon: &[u8]) -> Result<(), TrayError> {
    tray.set_icon(icon)?;
    tray.set_title(&config.title)?;
    tray.set_tooltip(&config.tooltip)?;

    let quit_clicks = tray.add_menu_item(&config.quit_label, &config.quit_tooltip)?;
    spawn_quit_coordinator(quit_clicks, tray.quit_handle())
        .map_err(|e| TrayError::EventLoop(format!("failed to start quit coordinator: {e}")))?;

    info!("Tray ready");
    Ok(())
}

pub fn on_exit() {
    info!("Tray exited");
}

/// Build the listener on the current thread and cycle until it fails.
///
/// Never returns under normal operation. The returned error is fatal.
pub fn run_hotkey_loop<L, F>(make_listener: F, combo: HotkeyCombo) -> HotkeyError
where
    L: HotkeyListener,
    F: FnOnce() -> Result<L, HotkeyError>,
{
    let listener = match make_listener() {
        Ok(listener) => listener,
        Err(e) => return e,
    };

    let mut hotkey_loop = HotkeyLoop::new(listener, combo);
    match hotkey_loop.run() {
        Err(e) => e,
        Ok(never) => match never {},
    }
}
