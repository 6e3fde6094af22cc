use crate::hotkey::{HotkeyCombo, Key, Modifier};

/// Display name used for the tray title and tooltip.
pub const APP_NAME: &str = "Simple Launcher";

/// Fixed, build-time configuration.
///
/// There is no configuration file and no command line; everything a user
/// sees comes from [`LauncherConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub hotkey: HotkeyCombo,
    pub title: String,
    pub tooltip: String,
    pub quit_label: String,
    pub quit_tooltip: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            hotkey: HotkeyCombo::new([Modifier::Ctrl, Modifier::Alt], Key::Char('O')),
            title: APP_NAME.into(),
            tooltip: APP_NAME.into(),
            quit_label: "Quit".into(),
            quit_tooltip: "Quit the whole app".into(),
        }
    }
}
