//! Error types for the hotkey and tray subsystems.
//!
//! Every variant here is fatal for the running process; the bootstrap logs
//! the error and exits non-zero.

use thiserror::Error;

/// Errors raised by a [`HotkeyListener`](crate::hotkey::HotkeyListener).
#[derive(Error, Debug)]
pub enum HotkeyError {
    /// The combination is held by another process or the OS refused it
    #[error("failed to register {combo}: {reason}")]
    Registration { combo: String, reason: String },

    /// The combination cannot be expressed to the OS
    #[error("invalid hotkey: {0}")]
    InvalidCombination(String),

    /// The OS stopped delivering hotkey events
    #[error("hotkey event source closed")]
    EventSourceClosed,

    /// The platform hotkey service could not be started
    #[error("global hotkeys unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by a [`TrayRunner`](crate::tray::TrayRunner) or inside `on_ready`.
#[derive(Error, Debug)]
pub enum TrayError {
    /// Icon bytes could not be decoded or applied
    #[error("tray icon error: {0}")]
    Icon(String),

    /// The tray icon could not be created
    #[error("failed to build tray icon: {0}")]
    Build(String),

    /// A menu entry could not be created or attached
    #[error("tray menu error: {0}")]
    Menu(String),

    /// The UI event loop failed or could not be created
    #[error("event loop error: {0}")]
    EventLoop(String),

    /// Another UI-loop driver is already running in this process
    #[error("a tray event loop is already running")]
    LoopAlreadyRunning,

    /// The menu item's click source was dropped with the tray session
    #[error("click source for '{0}' closed")]
    ClickSourceClosed(String),
}
