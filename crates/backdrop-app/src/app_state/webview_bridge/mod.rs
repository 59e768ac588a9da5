//! Bridge between the page webview and Rust handlers.
//!
//! IPC messages from the page are validated and dispatched to handlers;
//! state changes flow back as typed IPC pushes or evaluated mutation
//! scripts.

mod background_handlers;
mod ipc_dispatch;
mod lifecycle;
mod showcase_handlers;
mod upload_handlers;

use backdrop_webview::{IpcPayload, WebViewHandle};

use crate::app_state::core::BackdropApp;
use crate::app_state::types::PAGE_PANE_ID;

// =============================================================================
// SHARED HELPERS
// =============================================================================

impl BackdropApp {
    /// Handle to the page webview, if it exists.
    pub(super) fn page_handle(&self) -> Option<&WebViewHandle> {
        self.webviews.as_ref().and_then(|r| r.get(PAGE_PANE_ID))
    }

    /// Evaluate a script in the page webview. Failures are logged.
    pub(super) fn eval_in_page(&self, js: &str) {
        if let Some(handle) = self.page_handle() {
            if let Err(e) = handle.evaluate_script(js) {
                tracing::warn!(error = %e, "Failed to evaluate page script");
            }
        }
    }

    /// Push the menu open-state to the page.
    pub(super) fn push_menu_state(&self) {
        if let Some(handle) = self.page_handle() {
            if let Err(e) = handle.send_ipc("menu_state", &self.menu.state_payload()) {
                tracing::warn!(error = %e, "Failed to send menu_state");
            }
        }
    }

    /// Push the showcase widget state to the page.
    pub(super) fn push_showcase_state(&self) {
        if let Some(handle) = self.page_handle() {
            if let Err(e) = handle.send_ipc("showcase_state", &self.showcase.state_payload()) {
                tracing::warn!(error = %e, "Failed to send showcase_state");
            }
        }
    }
}

// =============================================================================
// PAYLOAD EXTRACTION
// =============================================================================

pub(super) fn extract_string_field(payload: &IpcPayload, field: &str) -> Option<String> {
    match payload {
        IpcPayload::Json(obj) => obj.get(field)?.as_str().map(String::from),
        _ => None,
    }
}

pub(super) fn extract_bool_field(payload: &IpcPayload, field: &str) -> Option<bool> {
    match payload {
        IpcPayload::Json(obj) => obj.get(field)?.as_bool(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fields_from_json_payload() {
        let payload = IpcPayload::Json(serde_json::json!({
            "mode": "solid",
            "on": true,
        }));
        assert_eq!(extract_string_field(&payload, "mode").as_deref(), Some("solid"));
        assert_eq!(extract_bool_field(&payload, "on"), Some(true));
    }

    #[test]
    fn missing_or_mistyped_fields_return_none() {
        let payload = IpcPayload::Json(serde_json::json!({ "mode": 5 }));
        assert_eq!(extract_string_field(&payload, "mode"), None);
        assert_eq!(extract_string_field(&payload, "value"), None);
        assert_eq!(extract_bool_field(&payload, "mode"), None);
    }

    #[test]
    fn non_json_payloads_return_none() {
        assert_eq!(extract_string_field(&IpcPayload::None, "x"), None);
        assert_eq!(
            extract_string_field(&IpcPayload::Text("x".into()), "x"),
            None
        );
    }
}
