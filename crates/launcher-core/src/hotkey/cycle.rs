//! Hotkey re-arm loop
//!
//! The listener primitive delivers one press/release pair per registration,
//! so a persistent shortcut is emulated by cycling:
//!
//! ```text
//! Unregistered -> Registered -> Pressed -> Released -> Unregistered -> ...
//! ```
//!
//! Presses that land between unregister and the next register are lost.
//! Nothing buffers across that gap.

use std::convert::Infallible;

use log::{error, info};

use super::{HotkeyCombo, HotkeyListener};
use crate::error::HotkeyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Unregistered,
    Registered,
    Pressed,
    Released,
}

/// Drives a [`HotkeyListener`] through endless registration cycles of one combination.
pub struct HotkeyLoop<L: HotkeyListener> {
    listener: L,
    combo: HotkeyCombo,
    state: CycleState,
    cycles: u64,
}

impl<L: HotkeyListener> HotkeyLoop<L> {
    pub fn new(listener: L, combo: HotkeyCombo) -> Self {
        Self {
            listener,
            combo,
            state: CycleState::Unregistered,
            cycles: 0,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Number of completed register/down/up/unregister cycles
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Run exactly one registration cycle.
    ///
    /// On error the loop is left in the state it reached; the caller is
    /// expected to terminate the process.
    pub fn run_cycle(&mut self) -> Result<(), HotkeyError> {
        let binding = match self.listener.register(&self.combo) {
            Ok(binding) => binding,
            Err(e) => {
                error!("hotkey: failed to register hotkey: {e}");
                return Err(e);
            }
        };
        self.state = CycleState::Registered;
        info!("hotkey: {} is registered", self.combo);

        self.listener.wait_for_keydown(&binding)?;
        self.state = CycleState::Pressed;
        info!("hotkey: {} is down", self.combo);

        self.listener.wait_for_keyup(&binding)?;
        self.state = CycleState::Released;
        info!("hotkey: {} is up", self.combo);

        self.listener.unregister(binding);
        self.state = CycleState::Unregistered;
        self.cycles += 1;
        info!("hotkey: {} is unregistered", self.combo);

        Ok(())
    }

    /// Cycle forever. Only returns when the listener fails.
    pub fn run(&mut self) -> Result<Infallible, HotkeyError> {
        loop {
            self.run_cycle()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::Binding;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Register(String),
        Down(u32),
        Up(u32),
        Unregister(u32),
    }

    /// Fake OS primitive: every wait returns immediately, registration can be
    /// made to fail after a number of successful ones.
    #[derive(Default)]
    struct ScriptedListener {
        calls: Vec<Call>,
        next_id: u32,
        active: Option<u32>,
        registrations: usize,
        fail_at: Option<usize>,
        close_on_keyup: bool,
    }

    impl HotkeyListener for ScriptedListener {
        fn register(&mut self, combo: &HotkeyCombo) -> Result<Binding, HotkeyError> {
            assert!(self.active.is_none(), "overlapping registration");
            if self.fail_at == Some(self.registrations) {
                return Err(HotkeyError::Registration {
                    combo: combo.to_string(),
                    reason: "already registered by another process".into(),
                });
            }
            self.registrations += 1;
            self.next_id += 1;
            self.active = Some(self.next_id);
            self.calls.push(Call::Register(combo.to_string()));
            Ok(Binding::new(self.next_id, combo.clone()))
        }

        fn wait_for_keydown(&mut self, binding: &Binding) -> Result<(), HotkeyError> {
            assert_eq!(self.active, Some(binding.id()));
            self.calls.push(Call::Down(binding.id()));
            Ok(())
        }

        fn wait_for_keyup(&mut self, binding: &Binding) -> Result<(), HotkeyError> {
            if self.close_on_keyup {
                return Err(HotkeyError::EventSourceClosed);
            }
            assert_eq!(self.calls.last(), Some(&Call::Down(binding.id())));
            self.calls.push(Call::Up(binding.id()));
            Ok(())
        }

        fn unregister(&mut self, binding: Binding) {
            assert_eq!(self.active.take(), Some(binding.id()));
            self.calls.push(Call::Unregister(binding.id()));
        }
    }

    fn ctrl_alt_o() -> HotkeyCombo {
        "Ctrl+Alt+O".parse().unwrap()
    }

    #[test]
    fn test_single_cycle_sequence() {
        let mut hotkey_loop = HotkeyLoop::new(ScriptedListener::default(), ctrl_alt_o());
        assert_eq!(hotkey_loop.state(), CycleState::Unregistered);

        hotkey_loop.run_cycle().unwrap();

        assert_eq!(
            hotkey_loop.listener().calls,
            vec![
                Call::Register("Ctrl+Alt+O".into()),
                Call::Down(1),
                Call::Up(1),
                Call::Unregister(1),
            ]
        );
        assert_eq!(hotkey_loop.state(), CycleState::Unregistered);
        assert_eq!(hotkey_loop.cycles(), 1);
    }

    #[test]
    fn test_reregisters_same_combo_every_cycle() {
        let mut hotkey_loop = HotkeyLoop::new(ScriptedListener::default(), ctrl_alt_o());
        for _ in 0..100 {
            hotkey_loop.run_cycle().unwrap();
        }
        assert_eq!(hotkey_loop.cycles(), 100);

        let calls = &hotkey_loop.listener().calls;
        for (n, cycle) in calls.chunks(4).enumerate() {
            let id = n as u32 + 1;
            assert_eq!(
                cycle,
                &[
                    Call::Register("Ctrl+Alt+O".into()),
                    Call::Down(id),
                    Call::Up(id),
                    Call::Unregister(id),
                ]
            );
        }
    }

    #[test]
    fn test_run_stops_on_registration_failure() {
        let listener = ScriptedListener {
            fail_at: Some(3),
            ..Default::default()
        };
        let mut hotkey_loop = HotkeyLoop::new(listener, ctrl_alt_o());

        let err = hotkey_loop.run().unwrap_err();
        assert!(matches!(err, HotkeyError::Registration { ref combo, .. } if combo == "Ctrl+Alt+O"));
        assert_eq!(hotkey_loop.cycles(), 3);
        assert_eq!(hotkey_loop.state(), CycleState::Unregistered);
    }

    #[test]
    fn test_combination_already_held_fails_first_cycle() {
        let listener = ScriptedListener {
            fail_at: Some(0),
            ..Default::default()
        };
        let mut hotkey_loop = HotkeyLoop::new(listener, ctrl_alt_o());

        assert!(hotkey_loop.run().is_err());
        assert_eq!(hotkey_loop.cycles(), 0);
        assert!(hotkey_loop.listener().calls.is_empty());
    }

    #[test]
    fn test_event_source_closing_is_propagated() {
        let listener = ScriptedListener {
            close_on_keyup: true,
            ..Default::default()
        };
        let mut hotkey_loop = HotkeyLoop::new(listener, ctrl_alt_o());

        let err = hotkey_loop.run_cycle().unwrap_err();
        assert!(matches!(err, HotkeyError::EventSourceClosed));
        assert_eq!(hotkey_loop.state(), CycleState::Pressed);
        assert_eq!(hotkey_loop.cycles(), 0);
    }
}
