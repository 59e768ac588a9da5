//! IPC message validation and dispatch from the page to Rust handlers.

use backdrop_webview::IpcMessage;

use crate::app_state::core::BackdropApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "page_ready",
    "menu_toggle",
    "menu_dismiss",
    "background_select",
    "color_picked",
    "upload_file",
    "showcase_increment",
    "showcase_input",
    "showcase_switch",
    "showcase_checkbox",
    "ping",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl BackdropApp {
    /// Handle a single IPC message from the page webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, pane_id: u32, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    pane_id,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(
                pane_id,
                kind = %msg.kind,
                "IPC message rejected: unknown kind"
            );
            return;
        }

        tracing::debug!(pane_id, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "ping" => {
                // Respond with pong — used for IPC round-trip testing
                if let Some(handle) = self.page_handle() {
                    let payload = serde_json::json!("pong");
                    if let Err(e) = handle.send_ipc("pong", &payload) {
                        tracing::warn!(pane_id, error = %e, "Failed to send pong");
                    }
                }
            }
            "page_ready" => {
                self.handle_page_ready();
            }
            "menu_toggle" => {
                self.handle_menu_toggle(&msg.payload);
            }
            "menu_dismiss" => {
                self.handle_menu_dismiss();
            }
            "background_select" => {
                self.handle_background_select(&msg.payload);
            }
            "color_picked" => {
                self.handle_color_picked(&msg.payload);
            }
            "upload_file" => {
                self.handle_upload_file(&msg.payload);
            }
            "showcase_increment" => {
                self.handle_showcase_increment();
            }
            "showcase_input" => {
                self.handle_showcase_input(&msg.payload);
            }
            "showcase_switch" => {
                self.handle_showcase_switch(&msg.payload);
            }
            "showcase_checkbox" => {
                self.handle_showcase_checkbox(&msg.payload);
            }
            _ => {
                // Shouldn't happen — allowlist checked above
                tracing::warn!(pane_id, kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_kind_allowed_valid() {
        assert!(is_ipc_kind_allowed("page_ready"));
        assert!(is_ipc_kind_allowed("background_select"));
        assert!(is_ipc_kind_allowed("upload_file"));
        assert!(is_ipc_kind_allowed("showcase_increment"));
        assert!(is_ipc_kind_allowed("ping"));
    }

    #[test]
    fn ipc_kind_rejected_unknown() {
        assert!(!is_ipc_kind_allowed("eval"));
        assert!(!is_ipc_kind_allowed("exec"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("background_select_extra"));
        assert!(!is_ipc_kind_allowed("PAGE_READY")); // case-sensitive
    }

    #[test]
    fn ipc_kind_rejected_injection_attempts() {
        assert!(!is_ipc_kind_allowed("ping\0"));
        assert!(!is_ipc_kind_allowed("ping; rm -rf /"));
        assert!(!is_ipc_kind_allowed("<script>alert(1)</script>"));
    }

    #[test]
    fn dispatch_mutates_state_for_valid_messages() {
        // No webview exists in tests; handlers still mutate state.
        let mut app = BackdropApp::new(backdrop_config::BackdropConfig::default());

        app.handle_ipc_message(1, r#"{"kind": "showcase_increment", "payload": null}"#);
        assert_eq!(app.showcase.count(), 1);

        app.handle_ipc_message(
            1,
            r#"{"kind": "menu_toggle", "payload": {"category": "solid"}}"#,
        );
        assert_eq!(
            app.menu.open(),
            Some(backdrop_common::MenuCategory::Solid)
        );
    }

    #[test]
    fn dispatch_ignores_unknown_and_malformed() {
        let mut app = BackdropApp::new(backdrop_config::BackdropConfig::default());
        app.handle_ipc_message(1, "not json at all");
        app.handle_ipc_message(1, r#"{"kind": "evil_kind", "payload": null}"#);
        assert_eq!(app.showcase.count(), 0);
        assert_eq!(app.menu.open(), None);
    }
}
