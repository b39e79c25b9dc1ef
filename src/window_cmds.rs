use std::sync::Mutex;

use tauri::{AppHandle, Manager};

use crate::titlebar::{TitleBar, TitleBarView};

/// Emitted with the fresh view snapshot after every title bar re-render.
pub const TITLEBAR_VIEW_EVENT: &str = "titlebar:view";

pub struct ChromeState {
    pub titlebar: Mutex<Option<TitleBar>>,
}

#[tauri::command]
pub fn window_minimize(state: tauri::State<ChromeState>) -> Result<(), String> {
    with_titlebar(&state, |bar| bar.minimize())
}

#[tauri::command]
pub fn window_toggle_maximize(state: tauri::State<ChromeState>) -> Result<(), String> {
    with_titlebar(&state, |bar| bar.toggle_maximize())
}

#[tauri::command]
pub fn window_close(state: tauri::State<ChromeState>) -> Result<(), String> {
    with_titlebar(&state, |bar| bar.close())
}

#[tauri::command]
pub fn titlebar_view(state: tauri::State<ChromeState>) -> Result<TitleBarView, String> {
    with_titlebar(&state, |bar| bar.view())
}

#[tauri::command]
pub fn window_start_drag(app: AppHandle) -> Result<(), String> {
    let window = app.get_webview_window("main").ok_or("No main window")?;
    window.start_dragging().map_err(|e| e.to_string())
}

fn with_titlebar<T>(
    state: &tauri::State<ChromeState>,
    f: impl FnOnce(&TitleBar) -> T,
) -> Result<T, String> {
    let guard = state.titlebar.lock().map_err(|e| e.to_string())?;
    guard
        .as_ref()
        .map(f)
        .ok_or_else(|| "Title bar not mounted".to_string())
}

/// Unmounts the title bar when the host window goes away.
pub fn unmount(window: &tauri::Window) {
    let Some(state) = window.try_state::<ChromeState>() else {
        return;
    };
    let lock = state.titlebar.lock();
    if let Ok(mut guard) = lock {
        if let Some(bar) = guard.take() {
            bar.unmount();
        }
    }
}
