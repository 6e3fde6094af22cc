//! Menu item click routing
//!
//! The native menu reports clicks by item id on the UI thread. The registry
//! turns each id into its own channel so a listener on any thread can block
//! on a single item.

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::error::TrayError;

/// Receiving end of one menu item's clicks
#[derive(Debug)]
pub struct ClickSource {
    label: String,
    clicks: Receiver<()>,
}

impl ClickSource {
    /// Block until the item is clicked.
    ///
    /// Fails once the tray session that owns the item has been torn down.
    pub fn wait(&self) -> Result<(), TrayError> {
        self.clicks
            .recv()
            .map_err(|_| TrayError::ClickSourceClosed(self.label.clone()))
    }
}

#[derive(Debug)]
struct MenuEntry {
    label: String,
    tooltip: String,
    clicks: Sender<()>,
}

/// Maps menu item ids to their click channels.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    entries: HashMap<String, MenuEntry>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, label: &str, tooltip: &str) -> ClickSource {
        let (tx, rx) = unbounded();
        let id = id.into();
        debug!("Menu item '{label}' ({id}): {tooltip}");
        self.entries.insert(
            id,
            MenuEntry {
                label: label.to_string(),
                tooltip: tooltip.to_string(),
                clicks: tx,
            },
        );
        ClickSource {
            label: label.to_string(),
            clicks: rx,
        }
    }

    /// Forward a click. Returns `false` for unknown ids.
    pub fn dispatch(&self, id: &str) -> bool {
        match self.entries.get(id) {
            Some(entry) => {
                debug!("Menu item clicked: {} ({})", entry.label, entry.tooltip);
                // Nobody listening any more is fine
                let _ = entry.clicks.send(());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
