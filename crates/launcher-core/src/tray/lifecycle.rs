//! Tray session lifecycle
//!
//! ```text
//! Starting -> Ready -> Quitting -> Exited
//! ```
//!
//! Each transition is a compare-and-swap, so `on_ready`, the quit request and
//! `on_exit` each happen at most once no matter how many threads race on them.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::error::TrayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayState {
    Starting,
    Ready,
    Quitting,
    Exited,
}

impl TrayState {
    fn as_u8(self) -> u8 {
        match self {
            TrayState::Starting => 0,
            TrayState::Ready => 1,
            TrayState::Quitting => 2,
            TrayState::Exited => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => TrayState::Starting,
            1 => TrayState::Ready,
            2 => TrayState::Quitting,
            _ => TrayState::Exited,
        }
    }
}

#[derive(Debug)]
pub struct TrayLifecycle {
    state: AtomicU8,
}

impl Default for TrayLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl TrayLifecycle {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(TrayState::Starting.as_u8()),
        }
    }

    pub fn state(&self) -> TrayState {
        TrayState::from_u8(self.state.load(Ordering::SeqCst))
    }

    fn transition(&self, from: TrayState, to: TrayState) -> bool {
        self.state
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// `true` only for the first call, and only from `Starting`
    pub fn mark_ready(&self) -> bool {
        self.transition(TrayState::Starting, TrayState::Ready)
    }

    /// `true` only for the first quit request after the session became ready
    pub fn request_quit(&self) -> bool {
        self.transition(TrayState::Ready, TrayState::Quitting)
    }

    /// `true` only the first time; the loop may also end without a quit request
    pub fn mark_exited(&self) -> bool {
        self.state.swap(TrayState::Exited.as_u8(), Ordering::SeqCst) != TrayState::Exited.as_u8()
    }
}

/// Process-wide flag backing [`UiLoopClaim`] for the native tray.
pub static UI_LOOP_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Proof that the holder is the only UI-loop driver; released on drop.
#[derive(Debug)]
pub struct UiLoopClaim {
    flag: &'static AtomicBool,
}

impl UiLoopClaim {
    pub fn acquire(flag: &'static AtomicBool) -> Result<Self, TrayError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| TrayError::LoopAlreadyRunning)?;
        Ok(Self { flag })
    }
}

impl Drop for UiLoopClaim {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
