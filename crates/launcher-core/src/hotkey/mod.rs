//! Global hotkey support
//!
//! ## Architecture
//!
//! ```text
//! hotkey/
//! ├── combo.rs     - Modifier/key combinations (parse + display)
//! ├── listener.rs  - OS primitive contract and the Binding it hands out
//! ├── cycle.rs     - Register/down/up/unregister re-arm loop
//! └── mod.rs       - Public API (this file)
//! ```

mod combo;
mod cycle;
mod listener;

pub use combo::{HotkeyCombo, Key, Modifier, NamedKey};
pub use cycle::{CycleState, HotkeyLoop};
pub use listener::{Binding, HotkeyListener};
