//! Core of simple-launcher: a global hotkey re-arm loop and a tray session
//! lifecycle, independent of any windowing or hotkey crate.
//!
//! The desktop crate plugs native implementations into [`HotkeyListener`]
//! and [`TrayRunner`]; everything here is testable without a display.

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod hotkey;
pub mod tray;

pub use config::{APP_NAME, LauncherConfig};
pub use error::{HotkeyError, TrayError};
pub use hotkey::{Binding, HotkeyCombo, HotkeyListener, HotkeyLoop};
pub use tray::{ClickSource, QuitHandle, Tray, TrayRunner};
