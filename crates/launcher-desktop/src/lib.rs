pub mod hotkey;
pub mod logging;
pub mod platform;
pub mod tray;

use anyhow::{Context, Result};
use launcher_core::{LauncherConfig, TrayRunner, app};
use log::info;

use crate::tray::TaoTray;

/// Start the hotkey thread, then block the main thread on the tray loop.
///
/// Returns after the user picks Quit. Hotkey failures never come back here;
/// they terminate the process from the hotkey thread.
pub fn run() -> Result<()> {
    let config = LauncherConfig::default();

    info!("Init");
    platform::spawn_hotkey_context(config.hotkey.clone())
        .context("Failed to start hotkey thread")?;

    info!("Run");
    let tray_loop = TaoTray::new().context("Failed to create tray event loop")?;
    tray_loop
        .run(
            |session| app::on_ready(session, &config, tray::icons::TRAY_ICON),
            app::on_exit,
        )
        .context("Tray failed")?;

    Ok(())
}
