//! Global hotkey listener backed by the `global-hotkey` crate (Tauri-maintained)

use std::str::FromStr;

use crossbeam_channel::Receiver;
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use launcher_core::{Binding, HotkeyCombo, HotkeyError, HotkeyListener};
use log::{debug, warn};

use crate::platform;

/// Convert a combination to the crate's `HotKey`.
///
/// The canonical `Ctrl+Alt+O` text is the same syntax `HotKey::from_str` accepts.
pub fn to_native(combo: &HotkeyCombo) -> Result<HotKey, HotkeyError> {
    HotKey::from_str(&combo.to_string())
        .map_err(|e| HotkeyError::InvalidCombination(format!("{combo}: {e}")))
}

/// Must be created on the thread that will wait for events.
pub struct GlobalHotkeyListener {
    manager: GlobalHotKeyManager,
    events: &'static Receiver<GlobalHotKeyEvent>,
    registered: Option<HotKey>,
}

impl GlobalHotkeyListener {
    pub fn new() -> Result<Self, HotkeyError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| HotkeyError::Unavailable(e.to_string()))?;
        Ok(Self {
            manager,
            events: GlobalHotKeyEvent::receiver(),
            registered: None,
        })
    }

    fn wait_for(&mut self, binding: &Binding, state: HotKeyState) -> Result<(), HotkeyError> {
        loop {
            let event = platform::next_hotkey_event(self.events)?;
            if event.id == binding.id() && event.state == state {
                return Ok(());
            }
            debug!("hotkey: skipping {event:?} while waiting for {state:?}");
        }
    }
}

impl HotkeyListener for GlobalHotkeyListener {
    fn register(&mut self, combo: &HotkeyCombo) -> Result<Binding, HotkeyError> {
        let hotkey = to_native(combo)?;
        self.manager
            .register(hotkey)
            .map_err(|e| HotkeyError::Registration {
                combo: combo.to_string(),
                reason: e.to_string(),
            })?;
        self.registered = Some(hotkey);
        Ok(Binding::new(hotkey.id(), combo.clone()))
    }

    fn wait_for_keydown(&mut self, binding: &Binding) -> Result<(), HotkeyError> {
        self.wait_for(binding, HotKeyState::Pressed)
    }

    fn wait_for_keyup(&mut self, binding: &Binding) -> Result<(), HotkeyError> {
        self.wait_for(binding, HotKeyState::Released)
    }

    fn unregister(&mut self, binding: Binding) {
        match self.registered.take() {
            Some(hotkey) if hotkey.id() == binding.id() => {
                if let Err(e) = self.manager.unregister(hotkey) {
                    warn!("hotkey: failed to unregister {}: {e}", binding.combo());
                }
            }
            other => {
                warn!("hotkey: {} is not the registered binding", binding.combo());
                self.registered = other;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_hotkey::hotkey::{Code, Modifiers};
    use launcher_core::LauncherConfig;

    #[test]
    fn test_default_combo_maps_to_ctrl_alt_key_o() {
        let hotkey = to_native(&LauncherConfig::default().hotkey).unwrap();
        assert_eq!(
            hotkey,
            HotKey::new(Some(Modifiers::CONTROL | Modifiers::ALT), Code::KeyO)
        );
    }

    #[test]
    fn test_function_and_named_keys_map() {
        let f5: HotkeyCombo = "Shift+F5".parse().unwrap();
        assert_eq!(
            to_native(&f5).unwrap(),
            HotKey::new(Some(Modifiers::SHIFT), Code::F5)
        );

        let space: HotkeyCombo = "Super+Space".parse().unwrap();
        assert_eq!(
            to_native(&space).unwrap(),
            HotKey::new(Some(Modifiers::SUPER), Code::Space)
        );
    }

    #[test]
    fn test_binding_id_matches_native_id() {
        let combo = LauncherConfig::default().hotkey;
        let hotkey = to_native(&combo).unwrap();
        let binding = Binding::new(hotkey.id(), combo);
        assert_eq!(binding.id(), hotkey.id());
    }
}
