//! Winit application handler for the overlay
//!
//! Everything here is marshaling: winit events become [`InputEvent`]s for
//! the widget, and the widget's [`HostAction`]s become calls on the real
//! window, cursor and settings surface.
//!
//! On Linux the web view and the tray icon live on GTK. GTK is initialized
//! before the loop starts and its pending events are drained every time
//! winit is about to wait.
//!
//! [`InputEvent`]: crate::window::events::InputEvent

use crate::content::{ContentView, DetachedContentView};
use crate::settings::{SettingsForm, SettingsStore};
use crate::utils::config::AppConfig;
use crate::utils::error::{IntoWidgetError, Result};
use crate::widget::{HostAction, Widget};
use crate::window::caption::Caption;
use crate::window::controller::NativeGesture;
use crate::window::events::EventTranslator;
use crate::window::frame::paint_frame;
use crate::window::geometry::{WindowGeometry, MAX_SIZE};
use crate::window::WindowChrome;
use log::{error, info, warn};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent as WinitWindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy},
    window::{Window as WinitWindow, WindowId},
};

#[cfg(feature = "webview")]
use crate::settings::surface::SettingsWindow;

#[cfg(feature = "tray")]
use crate::tray::Tray;

type OverlayWidget = Widget<Box<dyn SettingsStore>, Box<dyn ContentView>>;
type FrameSurface = softbuffer::Surface<Arc<WinitWindow>, Arc<WinitWindow>>;

/// How often GTK is pumped while winit has nothing to do
const GTK_PUMP_INTERVAL: Duration = Duration::from_millis(16);

/// Events delivered into the loop from the tray and the settings surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    OpenSettings,
    Quit,
    SettingsAccepted(SettingsForm),
    SettingsCancelled,
}

/// The overlay application
pub struct OverlayApp {
    config: AppConfig,

    /// Handed to the widget once the window exists
    store: Option<Box<dyn SettingsStore>>,

    #[cfg(any(feature = "tray", feature = "webview"))]
    proxy: EventLoopProxy<UserEvent>,

    window: Option<Arc<WinitWindow>>,

    surface: Option<FrameSurface>,

    caption: Option<Caption>,

    widget: Option<OverlayWidget>,

    translator: EventTranslator,

    #[cfg(feature = "webview")]
    settings_window: Option<SettingsWindow>,

    #[cfg(feature = "tray")]
    tray: Option<Tray>,
}

/// Run the overlay until it is closed
pub fn run(config: AppConfig, store: Box<dyn SettingsStore>) -> Result<()> {
    #[cfg(all(target_os = "linux", any(feature = "webview", feature = "tray")))]
    gtk::init().window_err("Failed to initialize GTK")?;

    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .window_err("Failed to create event loop")?;
    event_loop.set_control_flow(idle_control_flow(Instant::now()));

    let mut app = OverlayApp::new(config, store, event_loop.create_proxy());
    event_loop.run_app(&mut app).window_err("Event loop error")?;

    Ok(())
}

impl OverlayApp {
    pub fn new(
        config: AppConfig,
        store: Box<dyn SettingsStore>,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Self {
        #[cfg(not(any(feature = "tray", feature = "webview")))]
        let _ = proxy;

        Self {
            config,
            store: Some(store),
            #[cfg(any(feature = "tray", feature = "webview"))]
            proxy,
            window: None,
            surface: None,
            caption: None,
            widget: None,
            translator: EventTranslator::new(),
            #[cfg(feature = "webview")]
            settings_window: None,
            #[cfg(feature = "tray")]
            tray: None,
        }
    }

    fn create_overlay(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(store) = self.store.take() else {
            return Ok(());
        };

        let display = primary_display(event_loop);
        let chrome = WindowChrome::overlay(self.config.window.title.clone());
        let content: Box<dyn ContentView> =
            Box::new(DetachedContentView::new(self.config.window.url.clone()));
        let mut widget: OverlayWidget = Widget::new(store, content, chrome, display);
        let actions = widget.load_settings();

        let attributes = widget
            .chrome()
            .window_attributes(&widget.geometry())
            .with_visible(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .window_err("Failed to create window")?,
        );

        if window.outer_position().is_err() {
            info!("Window position is managed by the compositor; using native move and resize");
            widget.controller_mut().set_native_gestures(true);
        }

        #[cfg(feature = "webview")]
        {
            use crate::content::WebContentView;
            let bounds = widget.controller().content_bounds();
            match WebContentView::new(&window, &self.config.window.url, bounds) {
                Ok(view) => widget.attach_content(Box::new(view)),
                Err(e) => error!("{}; continuing without embedded content", e),
            }
        }

        match softbuffer::Context::new(window.clone())
            .and_then(|context| softbuffer::Surface::new(&context, window.clone()))
        {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => warn!("Frame painting unavailable: {}", e),
        }

        if !self.config.window.caption.is_empty() {
            match Caption::load_system_font(&self.config.window.caption) {
                Ok(caption) => self.caption = Some(caption),
                Err(e) => warn!("{}; drag strip left without caption", e),
            }
        }

        #[cfg(feature = "tray")]
        match Tray::new(self.proxy.clone(), &self.config.window.title) {
            Ok(tray) => self.tray = Some(tray),
            Err(e) => warn!("{}; use Ctrl+, and Ctrl+Q instead", e),
        }

        info!("Overlay window created on display {:?}", display);
        self.window = Some(window.clone());
        self.widget = Some(widget);
        self.apply(event_loop, actions);
        window.set_visible(true);

        Ok(())
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, actions: Vec<HostAction>) {
        for action in actions {
            match action {
                HostAction::SetGeometry(geometry) => self.set_geometry(geometry),
                HostAction::SetCursor(cursor) => {
                    if let Some(window) = &self.window {
                        window.set_cursor(cursor);
                    }
                }
                HostAction::SetLayer(layer) => {
                    if let Some(window) = &self.window {
                        window.set_window_level(layer.to_window_level());
                    }
                }
                HostAction::Redraw => {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                HostAction::BeginNativeGesture(gesture) => self.begin_native_gesture(gesture),
                HostAction::OpenSettings(form) => self.open_settings(event_loop, form),
                HostAction::Exit => {
                    info!("Closing overlay");
                    event_loop.exit();
                }
            }
        }
    }

    fn set_geometry(&self, geometry: WindowGeometry) {
        let Some(window) = &self.window else {
            return;
        };

        window.set_outer_position(PhysicalPosition::new(geometry.x, geometry.y));

        let size = PhysicalSize::new(geometry.width.max(1) as u32, geometry.height.max(1) as u32);
        if window.inner_size() != size {
            let _ = window.request_inner_size(size);
        }
    }

    fn begin_native_gesture(&self, gesture: NativeGesture) {
        let Some(window) = &self.window else {
            return;
        };

        let result = match gesture {
            NativeGesture::Move => window.drag_window(),
            NativeGesture::Resize(edge) => window.drag_resize_window(edge.to_resize_direction()),
        };
        if let Err(e) = result {
            warn!("Window system refused {:?}: {}", gesture, e);
        }
    }

    /// Re-read the primary display (resolution or scale may have changed)
    fn refresh_display(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(widget) = self.widget.as_mut() {
            widget.controller_mut().set_display(primary_display(event_loop));
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(surface), Some(widget)) =
            (self.window.as_ref(), self.surface.as_mut(), self.widget.as_ref())
        else {
            return;
        };

        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };

        if let Err(e) = surface.resize(width, height) {
            warn!("Failed to resize frame surface: {}", e);
            return;
        }

        match surface.buffer_mut() {
            Ok(mut buffer) => {
                let strip = widget.controller().drag_strip();
                paint_frame(&mut buffer, size.width, size.height, &strip, self.caption.as_ref());
                if let Err(e) = buffer.present() {
                    warn!("Failed to present frame: {}", e);
                }
            }
            Err(e) => warn!("Failed to map frame buffer: {}", e),
        }
    }

    #[cfg(feature = "webview")]
    fn open_settings(&mut self, event_loop: &ActiveEventLoop, form: SettingsForm) {
        if let Some(existing) = &self.settings_window {
            existing.focus();
            return;
        }

        let title = format!("{} Settings", self.config.window.title);
        match SettingsWindow::open(event_loop, self.proxy.clone(), &title, &form) {
            Ok(settings_window) => self.settings_window = Some(settings_window),
            Err(e) => error!("{}", e),
        }
    }

    #[cfg(not(feature = "webview"))]
    fn open_settings(&mut self, _event_loop: &ActiveEventLoop, form: SettingsForm) {
        info!(
            "Zoom {}%, always on top {}. Built without a settings surface: \
             Ctrl+= / Ctrl+- change zoom, Ctrl+T toggles always on top",
            form.zoom_percent,
            form.always_on_top
        );
    }

    #[cfg(feature = "webview")]
    fn close_settings(&mut self) {
        self.settings_window = None;
    }

    #[cfg(not(feature = "webview"))]
    fn close_settings(&mut self) {}

    #[cfg(feature = "webview")]
    fn is_settings_window(&self, id: WindowId) -> bool {
        self.settings_window.as_ref().is_some_and(|w| w.id() == id)
    }

    #[cfg(not(feature = "webview"))]
    fn is_settings_window(&self, _id: WindowId) -> bool {
        false
    }
}

impl ApplicationHandler<UserEvent> for OverlayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_overlay(event_loop) {
            error!("{}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        id: WindowId,
        event: WinitWindowEvent,
    ) {
        if self.is_settings_window(id) {
            if matches!(event, WinitWindowEvent::CloseRequested) {
                self.close_settings();
            }
            return;
        }

        match event {
            WinitWindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }
            WinitWindowEvent::ScaleFactorChanged { .. } | WinitWindowEvent::Focused(true) => {
                self.refresh_display(event_loop);
            }
            _ => {}
        }

        let Some(input) = self.translator.translate(&event) else {
            return;
        };
        let actions = match self.widget.as_mut() {
            Some(widget) => widget.handle_input(input),
            None => return,
        };
        self.apply(event_loop, actions);
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };

        let actions = match event {
            UserEvent::OpenSettings => vec![HostAction::OpenSettings(widget.show_settings())],
            UserEvent::Quit => widget.close(),
            UserEvent::SettingsAccepted(form) => {
                let actions = widget.accept_settings(form);
                self.close_settings();
                actions
            }
            UserEvent::SettingsCancelled => {
                self.close_settings();
                Vec::new()
            }
        };
        self.apply(event_loop, actions);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        #[cfg(all(target_os = "linux", any(feature = "webview", feature = "tray")))]
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }

        event_loop.set_control_flow(idle_control_flow(Instant::now()));
    }
}

/// Whether this build runs GTK next to winit
fn pumps_gtk() -> bool {
    cfg!(all(target_os = "linux", any(feature = "webview", feature = "tray")))
}

/// Control flow once pending events are handled
///
/// With GTK in the process winit has to wake up regularly, since GTK events
/// do not wake the winit loop.
fn idle_control_flow(now: Instant) -> ControlFlow {
    if pumps_gtk() {
        ControlFlow::WaitUntil(now + GTK_PUMP_INTERVAL)
    } else {
        ControlFlow::Wait
    }
}

/// Rectangle of the primary display in physical pixels
fn primary_display(event_loop: &ActiveEventLoop) -> WindowGeometry {
    match event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
    {
        Some(monitor) => {
            let position = monitor.position();
            let size = monitor.size();
            WindowGeometry::new(position.x, position.y, size.width as i32, size.height as i32)
        }
        None => {
            warn!("No monitor reported, assuming {}x{}", MAX_SIZE.width, MAX_SIZE.height);
            WindowGeometry::new(0, 0, MAX_SIZE.width, MAX_SIZE.height)
        }
    }
}
