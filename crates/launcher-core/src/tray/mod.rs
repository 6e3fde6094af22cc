//! System tray
//!
//! The OS tray loop owns the calling thread until quit, so the controller is
//! split in two: a [`TrayRunner`] that drives the loop, and a [`Tray`] handed
//! to `on_ready` for configuring the session once the icon exists.
//!
//! ## Architecture
//!
//! ```text
//! tray/
//! ├── lifecycle.rs - Starting/Ready/Quitting/Exited + single UI-loop claim
//! ├── menu.rs      - Menu item id -> click channel routing
//! ├── quit.rs      - Cross-thread quit handle and quit coordinator
//! └── mod.rs       - Controller traits (this file)
//! ```

mod lifecycle;
mod menu;
mod quit;

pub use lifecycle::{TrayLifecycle, TrayState, UI_LOOP_ACTIVE, UiLoopClaim};
pub use menu::{ClickSource, MenuRegistry};
pub use quit::{QuitHandle, spawn_quit_coordinator};

use crate::error::TrayError;

/// A live tray session, only reachable on the UI thread.
pub trait Tray {
    /// Encoded image (PNG or ICO), passed through unmodified
    fn set_icon(&mut self, icon: &[u8]) -> Result<(), TrayError>;

    fn set_title(&mut self, title: &str) -> Result<(), TrayError>;

    fn set_tooltip(&mut self, tooltip: &str) -> Result<(), TrayError>;

    fn add_menu_item(&mut self, label: &str, tooltip: &str) -> Result<ClickSource, TrayError>;

    /// Handle that can end the session from any thread
    fn quit_handle(&self) -> QuitHandle;
}

/// Drives the OS tray event loop on the current thread.
pub trait TrayRunner {
    /// Blocks until quit is requested.
    ///
    /// `on_ready` runs exactly once after the icon becomes visible; an error
    /// from it tears the session down and is returned. `on_exit` runs exactly
    /// once before this returns.
    fn run<R, X>(self, on_ready: R, on_exit: X) -> Result<(), TrayError>
    where
        R: FnOnce(&mut dyn Tray) -> Result<(), TrayError>,
        X: FnOnce();
}
