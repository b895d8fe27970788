//! Settings surface model
//!
//! The form behaves like a spin box and a check box: zoom in integer percent
//! limited to 25..=200 with 25-point steps, and the always-on-top flag. The
//! host renders it (see `settings_page_html`) and hands back the accepted
//! form over IPC.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM_PERCENT: i32 = 25;
pub const MAX_ZOOM_PERCENT: i32 = 200;
pub const ZOOM_STEP_PERCENT: i32 = 25;

/// Size of the settings window
pub const DIALOG_SIZE: (u32, u32) = (300, 200);

/// Values shown in and returned by the settings surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    /// Zoom in percent
    pub zoom_percent: i32,

    /// Keep the overlay above other windows
    pub always_on_top: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self { zoom_percent: 100, always_on_top: false }
    }
}

impl SettingsForm {
    /// Form pre-populated from live state
    pub fn from_current(zoom_factor: f64, always_on_top: bool) -> Self {
        let mut form = Self { zoom_percent: 100, always_on_top };
        form.set_zoom_percent((zoom_factor * 100.0).round() as i32);
        form
    }

    /// Set the zoom, limited to the spin box range
    pub fn set_zoom_percent(&mut self, percent: i32) {
        self.zoom_percent = percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
    }

    /// Move the zoom by `steps` spin steps
    pub fn step_zoom(&mut self, steps: i32) {
        self.set_zoom_percent(snap_percent(self.zoom_percent) + steps * ZOOM_STEP_PERCENT);
    }

    /// Zoom factor applied on accept: snapped to a step and clamped
    pub fn zoom_factor(&self) -> f64 {
        f64::from(snap_percent(self.zoom_percent)) / 100.0
    }
}

/// Nearest multiple of the step, inside the range
fn snap_percent(percent: i32) -> i32 {
    let steps = (f64::from(percent) / f64::from(ZOOM_STEP_PERCENT)).round() as i32;
    (steps * ZOOM_STEP_PERCENT).clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT)
}

/// Message posted by the settings page
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
enum IpcMessage {
    Accept { zoom_percent: i32, always_on_top: bool },
    Cancel,
}

/// Decode an IPC message from the settings page
///
/// `Some(Some(form))` on accept, `Some(None)` on cancel, `None` when the
/// message is not understood.
pub fn parse_ipc_message(body: &str) -> Option<Option<SettingsForm>> {
    match serde_json::from_str::<IpcMessage>(body) {
        Ok(IpcMessage::Accept { zoom_percent, always_on_top }) => {
            Some(Some(SettingsForm { zoom_percent, always_on_top }))
        }
        Ok(IpcMessage::Cancel) => Some(None),
        Err(e) => {
            log::warn!("Ignoring settings message {:?}: {}", body, e);
            None
        }
    }
}

/// HTML for the settings surface, pre-filled from `form`
pub fn settings_page_html(title: &str, form: &SettingsForm) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: sans-serif; margin: 16px; background: #1e1e1e; color: #eee; }}
  label {{ display: block; margin-bottom: 12px; }}
  input[type=number] {{ width: 72px; }}
  button {{ margin-top: 24px; width: 100%; }}
</style>
</head>
<body>
<label>Zoom: <input id="zoom" type="number" min="{min}" max="{max}" step="{step}" value="{zoom}">%</label>
<label><input id="top" type="checkbox"{checked}> Always on top</label>
<button id="apply">Apply</button>
<script>
  document.getElementById('apply').addEventListener('click', function () {{
    window.ipc.postMessage(JSON.stringify({{
      action: 'accept',
      zoomPercent: parseInt(document.getElementById('zoom').value, 10) || 100,
      alwaysOnTop: document.getElementById('top').checked
    }}));
  }});
  document.addEventListener('keydown', function (e) {{
    if (e.key === 'Escape') {{ window.ipc.postMessage(JSON.stringify({{ action: 'cancel' }})); }}
  }});
</script>
</body>
</html>"#,
        title = escape_html(title),
        min = MIN_ZOOM_PERCENT,
        max = MAX_ZOOM_PERCENT,
        step = ZOOM_STEP_PERCENT,
        zoom = form.zoom_percent,
        checked = if form.always_on_top { " checked" } else { "" },
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
