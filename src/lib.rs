use std::sync::{Arc, Mutex};

use tauri::{Emitter, Manager};

mod host;
mod platform;
mod titlebar;
mod window_cmds;

pub use titlebar::{TitleBar, TitleBarOptions, TitleBarView, WindowControl};

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let window = app
                .get_webview_window("main")
                .ok_or("No main window")?;

            // The custom title bar replaces native decorations on Windows.
            #[cfg(target_os = "windows")]
            window.set_decorations(false)?;

            let initial = window.is_maximized().unwrap_or(false);
            app.manage(host::MaximizeTracker::new(initial));

            let service = Arc::new(host::TauriWindowControl::new(window.clone()));
            let sink_window = window.clone();
            let titlebar = titlebar::TitleBar::mount(
                service,
                titlebar::TitleBarOptions::default(),
                Box::new(move |view| {
                    if let Err(e) = sink_window.emit(window_cmds::TITLEBAR_VIEW_EVENT, &view) {
                        log::warn!("Failed to emit title bar view: {}", e);
                    }
                }),
            );
            app.manage(window_cmds::ChromeState {
                titlebar: Mutex::new(Some(titlebar)),
            });

            log::info!("Window chrome mounted (maximized: {})", initial);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Window chrome
            window_cmds::window_minimize,
            window_cmds::window_toggle_maximize,
            window_cmds::window_close,
            window_cmds::window_start_drag,
            window_cmds::titlebar_view,
            // Platform
            platform::get_chrome_info,
        ])
        .on_window_event(|window, event| match event {
            tauri::WindowEvent::Resized(_) => host::sync_maximized(window),
            tauri::WindowEvent::Destroyed => window_cmds::unmount(window),
            _ => {}
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
