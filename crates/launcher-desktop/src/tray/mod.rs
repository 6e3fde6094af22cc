//! System Tray Module
//!
//! Drives the tray on the main thread with a `tao` event loop and a
//! `tray-icon` icon/menu. Menu clicks and quit requests from other threads
//! arrive as user events through the loop's proxy.
//!
//! ## Architecture
//!
//! ```text
//! tray/
//! ├── icons.rs     - Embedded icon & decoding
//! └── mod.rs       - Event loop runner and live session (this file)
//! ```

pub mod icons;

use std::sync::Arc;

use launcher_core::tray::{MenuRegistry, TrayLifecycle, UI_LOOP_ACTIVE, UiLoopClaim};
use launcher_core::{ClickSource, QuitHandle, Tray, TrayError, TrayRunner};
use log::{debug, info};
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::platform::run_return::EventLoopExtRunReturn;
use tray_icon::menu::{Menu, MenuEvent, MenuItem};
use tray_icon::{TrayIcon, TrayIconBuilder};

pub const TRAY_ID: &str = "simple-launcher-tray";

#[derive(Debug)]
enum UserEvent {
    Menu(MenuEvent),
    Quit,
}

/// Owns the UI event loop. Create and run it on the main thread.
pub struct TaoTray {
    event_loop: EventLoop<UserEvent>,
    claim: UiLoopClaim,
}

impl TaoTray {
    pub fn new() -> Result<Self, TrayError> {
        let claim = UiLoopClaim::acquire(&UI_LOOP_ACTIVE)?;
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
        Ok(Self { event_loop, claim })
    }
}

/// The visible tray icon plus its menu, alive between ready and quit
struct NativeSession {
    icon: TrayIcon,
    menu: Menu,
    registry: MenuRegistry,
    quit: QuitHandle,
}

impl NativeSession {
    fn build(quit: QuitHandle) -> Result<Self, TrayError> {
        let menu = Menu::new();
        let icon = TrayIconBuilder::new()
            .with_id(TRAY_ID)
            .with_menu(Box::new(menu.clone()))
            .build()
            .map_err(|e| TrayError::Build(e.to_string()))?;

        Ok(Self {
            icon,
            menu,
            registry: MenuRegistry::new(),
            quit,
        })
    }
}

impl Tray for NativeSession {
    fn set_icon(&mut self, icon: &[u8]) -> Result<(), TrayError> {
        let icon = icons::decode_icon(icon)?;
        self.icon
            .set_icon(Some(icon))
            .map_err(|e| TrayError::Icon(e.to_string()))
    }

    fn set_title(&mut self, title: &str) -> Result<(), TrayError> {
        // Only rendered on macOS and Linux
        self.icon.set_title(Some(title));
        Ok(())
    }

    fn set_tooltip(&mut self, tooltip: &str) -> Result<(), TrayError> {
        self.icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| TrayError::Build(e.to_string()))
    }

    fn add_menu_item(&mut self, label: &str, tooltip: &str) -> Result<ClickSource, TrayError> {
        // Native menus have no per-item tooltip; the registry keeps it
        let item = MenuItem::new(label, true, None);
        self.menu
            .append(&item)
            .map_err(|e| TrayError::Menu(e.to_string()))?;
        Ok(self.registry.register(item.id().0.clone(), label, tooltip))
    }

    fn quit_handle(&self) -> QuitHandle {
        self.quit.clone()
    }
}

impl TrayRunner for TaoTray {
    fn run<R, X>(self, on_ready: R, on_exit: X) -> Result<(), TrayError>
    where
        R: FnOnce(&mut dyn Tray) -> Result<(), TrayError>,
        X: FnOnce(),
    {
        let TaoTray {
            mut event_loop,
            claim,
        } = self;

        let menu_proxy = event_loop.create_proxy();
        MenuEvent::set_event_handler(Some(move |event| {
            let _ = menu_proxy.send_event(UserEvent::Menu(event));
        }));

        let lifecycle = Arc::new(TrayLifecycle::new());
        let quit_proxy = event_loop.create_proxy();
        let quit = QuitHandle::new(lifecycle.clone(), move || {
            let _ = quit_proxy.send_event(UserEvent::Quit);
        });

        let mut on_ready = Some(on_ready);
        let mut on_exit = Some(on_exit);
        let mut session: Option<NativeSession> = None;
        let mut failure: Option<TrayError> = None;

        let code = event_loop.run_return(|event, _target, control_flow| match event {
            Event::NewEvents(StartCause::Init) => {
                *control_flow = ControlFlow::Wait;

                // The icon must be created once the loop is running (macOS)
                let ready = NativeSession::build(quit.clone()).and_then(|mut built| {
                    lifecycle.mark_ready();
                    if let Some(on_ready) = on_ready.take() {
                        on_ready(&mut built)?;
                    }
                    Ok(built)
                });

                match ready {
                    Ok(built) => session = Some(built),
                    Err(e) => {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            Event::UserEvent(UserEvent::Menu(event)) => {
                if let Some(active) = &session
                    && !active.registry.dispatch(&event.id.0)
                {
                    debug!("Ignoring click on unknown menu item {}", event.id.0);
                }
            }
            Event::UserEvent(UserEvent::Quit) => {
                info!("Removing tray icon");
                drop(session.take());
                *control_flow = ControlFlow::Exit;
            }
            Event::LoopDestroyed => {
                drop(session.take());
                if lifecycle.mark_exited()
                    && let Some(on_exit) = on_exit.take()
                {
                    on_exit();
                }
            }
            _ => {}
        });
        debug!("Tray event loop returned {code}");

        MenuEvent::set_event_handler(None::<fn(MenuEvent)>);
        drop(claim);

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
