pub const DELETE_PROMPT: &str = "¿Estás seguro de eliminar este registro?";

/// Browser `confirm()` dialog. Declined when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
