//! HTML settings window
//!
//! A small always-on-top window whose web view renders the settings form
//! and posts the result back through the event loop proxy.

use crate::settings::dialog::{parse_ipc_message, settings_page_html, SettingsForm, DIALOG_SIZE};
use crate::utils::error::{IntoWidgetError, Result};
use crate::window::UserEvent;
use log::debug;
use std::sync::{Arc, Mutex};
use winit::dpi::LogicalSize;
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::window::{Window as WinitWindow, WindowAttributes, WindowId, WindowLevel};
use wry::{WebView, WebViewBuilder};

/// Open settings window
pub struct SettingsWindow {
    window: Arc<WinitWindow>,
    _webview: WebView,
}

impl SettingsWindow {
    /// Open the settings window pre-filled with `form`
    pub fn open(
        event_loop: &ActiveEventLoop,
        proxy: EventLoopProxy<UserEvent>,
        title: &str,
        form: &SettingsForm,
    ) -> Result<Self> {
        let attributes = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(DIALOG_SIZE.0, DIALOG_SIZE.1))
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .window_err("Failed to create settings window")?,
        );

        let proxy = Mutex::new(proxy);
        let webview = WebViewBuilder::new()
            .with_html(settings_page_html(title, form))
            .with_ipc_handler(move |request: wry::http::Request<String>| {
                let event = match parse_ipc_message(request.body()) {
                    Some(Some(form)) => UserEvent::SettingsAccepted(form),
                    Some(None) => UserEvent::SettingsCancelled,
                    None => return,
                };
                if let Ok(proxy) = proxy.lock() {
                    let _ = proxy.send_event(event);
                }
            })
            .build(window.as_ref())
            .content_err("Failed to create settings view")?;

        debug!("Settings window opened with {:?}", form);
        Ok(Self { window, _webview: webview })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn focus(&self) {
        self.window.focus_window();
    }
}
