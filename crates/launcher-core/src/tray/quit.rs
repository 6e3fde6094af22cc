use std::fmt;
use std::sync::Arc;
use std::thread::JoinHandle;

use log::{debug, info};

use super::{ClickSource, TrayLifecycle};
use crate::context::spawn_dedicated;

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Requests teardown of a running tray from any thread.
///
/// `wake` must hand the request to the UI thread (e.g. through an event
/// loop proxy); it is called at most once per session.
#[derive(Clone)]
pub struct QuitHandle {
    lifecycle: Arc<TrayLifecycle>,
    wake: Waker,
}

impl QuitHandle {
    pub fn new(lifecycle: Arc<TrayLifecycle>, wake: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            lifecycle,
            wake: Arc::new(wake),
        }
    }

    /// Returns `true` if this call was the one that requested the quit.
    pub fn quit(&self) -> bool {
        if self.lifecycle.request_quit() {
            (self.wake)();
            true
        } else {
            debug!("Quit ignored in state {:?}", self.lifecycle.state());
            false
        }
    }
}

impl fmt::Debug for QuitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuitHandle")
            .field("state", &self.lifecycle.state())
            .finish()
    }
}

/// Block on `clicks` in a dedicated thread and quit the tray on the first click.
///
/// The thread ends after requesting the quit, or silently if the tray goes
/// away first.
pub fn spawn_quit_coordinator(
    clicks: ClickSource,
    quit: QuitHandle,
) -> std::io::Result<JoinHandle<()>> {
    spawn_dedicated("quit-coordinator", move || {
        if clicks.wait().is_err() {
            debug!("Quit coordinator stopped: tray closed");
            return;
        }
        info!("Requesting quit");
        quit.quit();
        info!("Finished quitting");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tray::MenuRegistry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handle() -> (QuitHandle, Arc<TrayLifecycle>, Arc<AtomicUsize>) {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let lifecycle = Arc::new(TrayLifecycle::new());
        let handle = QuitHandle::new(lifecycle.clone(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (handle, lifecycle, wakes)
    }

    #[test]
    fn test_quit_wakes_once() {
        let (handle, lifecycle, wakes) = counting_handle();
        lifecycle.mark_ready();

        assert!(handle.quit());
        assert!(!handle.clone().quit());
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_quit_before_ready_does_not_wake() {
        let (handle, _lifecycle, wakes) = counting_handle();
        assert!(!handle.quit());
        assert_eq!(wakes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_coordinator_quits_on_click() {
        let (handle, lifecycle, wakes) = counting_handle();
        lifecycle.mark_ready();
        let mut registry = MenuRegistry::new();
        let clicks = registry.register("quit", "Quit", "");

        let coordinator = spawn_quit_coordinator(clicks, handle.clone()).unwrap();
        registry.dispatch("quit");
        registry.dispatch("quit");
        coordinator.join().unwrap();

        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_coordinator_exits_when_tray_closes() {
        let (handle, lifecycle, wakes) = counting_handle();
        lifecycle.mark_ready();
        let mut registry = MenuRegistry::new();
        let clicks = registry.register("quit", "Quit", "");

        let coordinator = spawn_quit_coordinator(clicks, handle).unwrap();
        drop(registry);
        coordinator.join().unwrap();

        assert_eq!(wakes.load(Ordering::SeqCst), 0);
    }
}
