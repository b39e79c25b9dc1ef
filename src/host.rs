use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use tauri::{Emitter, Listener, Manager, WebviewWindow};

use crate::titlebar::{MaximizedHandler, MaximizedWatch, WindowControl};

/// Emitted with a bool payload once per maximize/restore transition.
pub const MAXIMIZE_CHANGE_EVENT: &str = "window:maximize-change";

/// `WindowControl` backed by the app's webview window. Command failures are
/// logged and dropped; the resulting state, if any, comes back through the
/// maximize-change event like any other transition.
pub struct TauriWindowControl {
    window: WebviewWindow,
}

impl TauriWindowControl {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl WindowControl for TauriWindowControl {
    fn query_maximized(&self) -> Pin<Box<dyn Future<Output = bool> + Send>> {
        let window = self.window.clone();
        Box::pin(async move { window.is_maximized().unwrap_or(false) })
    }

    fn watch_maximized(&self, handler: MaximizedHandler) -> MaximizedWatch {
        let id = self.window.listen(MAXIMIZE_CHANGE_EVENT, move |event| {
            match serde_json::from_str::<bool>(event.payload()) {
                Ok(maximized) => handler(maximized),
                Err(e) => log::warn!("Ignoring malformed maximize-change payload: {}", e),
            }
        });
        let window = self.window.clone();
        MaximizedWatch::new(move || window.unlisten(id))
    }

    fn minimize(&self) {
        if let Err(e) = self.window.minimize() {
            log::warn!("Minimize failed: {}", e);
        }
    }

    fn toggle_maximize(&self) {
        let result = if self.window.is_maximized().unwrap_or(false) {
            self.window.unmaximize()
        } else {
            self.window.maximize()
        };
        if let Err(e) = result {
            log::warn!("Toggle maximize failed: {}", e);
        }
    }

    fn close(&self) {
        if let Err(e) = self.window.close() {
            log::warn!("Close failed: {}", e);
        }
    }
}

/// The host only reports generic resize events; this derives maximize and
/// restore transitions from them, so subscribers see one notification per
/// transition rather than one per resize.
pub struct MaximizeTracker {
    maximized: Mutex<bool>,
}

impl MaximizeTracker {
    pub fn new(initial: bool) -> Self {
        Self {
            maximized: Mutex::new(initial),
        }
    }

    /// Returns the new state when it differs from the last observed one.
    pub fn observe(&self, maximized: bool) -> Option<bool> {
        let mut last = self.maximized.lock().unwrap();
        if *last == maximized {
            return None;
        }
        *last = maximized;
        Some(maximized)
    }
}

/// Window-event hook body for resize events.
pub fn sync_maximized(window: &tauri::Window) {
    let Some(tracker) = window.try_state::<MaximizeTracker>() else {
        return;
    };
    let maximized = window.is_maximized().unwrap_or(false);
    if let Some(changed) = tracker.observe(maximized) {
        if let Err(e) = window.emit(MAXIMIZE_CHANGE_EVENT, changed) {
            log::warn!("Failed to emit maximize-change event: {}", e);
        }
    }
}
