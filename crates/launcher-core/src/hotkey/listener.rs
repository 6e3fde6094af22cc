use super::HotkeyCombo;
use crate::error::HotkeyError;

/// One live registration of a combination with the OS.
///
/// Not `Clone`: [`HotkeyListener::unregister`] consumes it, so a single
/// owner can never hold two registrations of the same combination.
#[derive(Debug, PartialEq, Eq)]
pub struct Binding {
    id: u32,
    combo: HotkeyCombo,
}

impl Binding {
    pub fn new(id: u32, combo: HotkeyCombo) -> Self {
        Self { id, combo }
    }

    /// Identifier the OS tags events for this binding with
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn combo(&self) -> &HotkeyCombo {
        &self.combo
    }
}

/// A global hotkey primitive that yields one press/release pair per registration.
///
/// Both waits block the calling thread with no timeout and return once per
/// physical transition of the given binding.
pub trait HotkeyListener {
    fn register(&mut self, combo: &HotkeyCombo) -> Result<Binding, HotkeyError>;

    fn wait_for_keydown(&mut self, binding: &Binding) -> Result<(), HotkeyError>;

    fn wait_for_keyup(&mut self, binding: &Binding) -> Result<(), HotkeyError>;

    fn unregister(&mut self, binding: Binding);
}
