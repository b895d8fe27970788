//! System tray icon with a Settings / Quit menu

use crate::utils::error::{IntoWidgetError, Result};
use crate::window::UserEvent;
use log::debug;
use std::sync::Mutex;
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use winit::event_loop::EventLoopProxy;

const ICON_SIZE: u32 = 16;

/// Tray icon kept alive for the lifetime of the overlay
pub struct Tray {
    _icon: TrayIcon,
}

impl Tray {
    pub fn new(proxy: EventLoopProxy<UserEvent>, tooltip: &str) -> Result<Self> {
        let menu = Menu::new();
        let settings = MenuItem::new("Settings", true, None);
        let quit = MenuItem::new("Quit", true, None);
        menu.append(&settings).tray_err("Failed to build tray menu")?;
        menu.append(&PredefinedMenuItem::separator()).tray_err("Failed to build tray menu")?;
        menu.append(&quit).tray_err("Failed to build tray menu")?;

        let settings_id = settings.id().clone();
        let quit_id = quit.id().clone();
        let proxy = Mutex::new(proxy);
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            let user_event = if event.id == settings_id {
                UserEvent::OpenSettings
            } else if event.id == quit_id {
                UserEvent::Quit
            } else {
                return;
            };
            if let Ok(proxy) = proxy.lock() {
                let _ = proxy.send_event(user_event);
            }
        }));

        let icon = Icon::from_rgba(plain_icon(), ICON_SIZE, ICON_SIZE)
            .tray_err("Failed to build tray icon")?;
        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(tooltip)
            .with_icon(icon)
            .build()
            .tray_err("Failed to create tray icon")?;

        debug!("Tray icon created");
        Ok(Self { _icon: tray })
    }
}

/// Opaque white square
fn plain_icon() -> Vec<u8> {
    vec![0xFF; (ICON_SIZE * ICON_SIZE * 4) as usize]
}
