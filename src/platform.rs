use serde::Serialize;

/// Tells the front end whether this platform uses the custom title bar.
/// Windows runs without native decorations; macOS and Linux keep native
/// chrome for proper drag / resize / snap behavior.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeInfo {
    pub platform: &'static str,
    pub custom_titlebar: bool,
}

#[tauri::command]
pub fn get_chrome_info() -> ChromeInfo {
    ChromeInfo {
        platform: std::env::consts::OS,
        custom_titlebar: cfg!(target_os = "windows"),
    }
}
