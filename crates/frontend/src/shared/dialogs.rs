//! Blocking browser dialogs (`window.alert` / `window.confirm`)

/// Ask the user to confirm. Returns `false` when there is no window or the dialog fails.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}
