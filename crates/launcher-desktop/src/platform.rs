//! Thread affinity for the hotkey context
//!
//! - Linux (X11): `global-hotkey` runs its own X connection thread, so the
//!   hotkey thread can simply block on the event channel.
//! - Windows: hotkey messages are posted to the hidden window of the thread
//!   that created the manager. That thread has to pump its own queue.

use crossbeam_channel::Receiver;
use global_hotkey::GlobalHotKeyEvent;
use launcher_core::HotkeyCombo;
use launcher_core::HotkeyError;
use launcher_core::app::run_hotkey_loop;
use launcher_core::context::{abort_process, spawn_dedicated};

use crate::hotkey::GlobalHotkeyListener;

pub const HOTKEY_THREAD: &str = "hotkey";

/// Start the hotkey loop on its own thread. Fire-and-forget: the thread is
/// never joined, and any hotkey failure terminates the process.
pub fn spawn_hotkey_context(combo: HotkeyCombo) -> std::io::Result<()> {
    spawn_dedicated(HOTKEY_THREAD, move || {
        let err = run_hotkey_loop(GlobalHotkeyListener::new, combo);
        abort_process(err);
    })?;
    Ok(())
}

#[cfg(not(windows))]
pub fn next_hotkey_event(
    events: &Receiver<GlobalHotKeyEvent>,
) -> Result<GlobalHotKeyEvent, HotkeyError> {
    events.recv().map_err(|_| HotkeyError::EventSourceClosed)
}

#[cfg(windows)]
const PUMP_INTERVAL: std::time::Duration = std::time::Duration::from_millis(15);

#[cfg(windows)]
pub fn next_hotkey_event(
    events: &Receiver<GlobalHotKeyEvent>,
) -> Result<GlobalHotKeyEvent, HotkeyError> {
    use crossbeam_channel::RecvTimeoutError;

    loop {
        pump_thread_messages();
        match events.recv_timeout(PUMP_INTERVAL) {
            Ok(event) => return Ok(event),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Err(HotkeyError::EventSourceClosed),
        }
    }
}

#[cfg(windows)]
fn pump_thread_messages() {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, MSG, PM_REMOVE, PeekMessageW, TranslateMessage,
    };

    let mut msg = MSG::default();
    // SAFETY: `msg` is a valid out-pointer and a null HWND selects every
    // window owned by the calling thread.
    unsafe {
        while PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use global_hotkey::HotKeyState;

    #[test]
    fn test_next_event_reports_closed_channel() {
        let (tx, rx) = unbounded::<GlobalHotKeyEvent>();
        drop(tx);
        assert!(matches!(
            next_hotkey_event(&rx),
            Err(HotkeyError::EventSourceClosed)
        ));
    }

    #[test]
    fn test_next_event_returns_queued_event() {
        let (tx, rx) = unbounded();
        tx.send(GlobalHotKeyEvent {
            id: 7,
            state: HotKeyState::Pressed,
        })
        .unwrap();

        let event = next_hotkey_event(&rx).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.state, HotKeyState::Pressed);
    }
}
