//! IPC protocol between Rust and the page JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.backdrop.ipc.send(kind, payload)`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   JavaScript functions in the WebView context.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: IpcPayload,
}

/// Payload of an IPC message — either a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // Backdrop IPC bridge
    window.backdrop = window.backdrop || {};
    window.backdrop.ipc = {
        postMessage: function(msg) {
            window.ipc.postMessage(JSON.stringify(msg));
        },
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        // Callbacks registered by JS code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.backdrop.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_payload_message() {
        let raw =
            r##"{"kind": "background_select", "payload": {"mode": "solid", "value": "#3b82f6"}}"##;
        let msg = IpcMessage::from_json(raw).unwrap();
        assert_eq!(msg.kind, "background_select");
        match msg.payload {
            IpcPayload::Json(v) => assert_eq!(v["mode"], "solid"),
            _ => panic!("expected JSON payload"),
        }
    }

    #[test]
    fn parses_text_payload_message() {
        let raw = r#"{"kind": "ping", "payload": "hello"}"#;
        let msg = IpcMessage::from_json(raw).unwrap();
        assert_eq!(msg.kind, "ping");
        assert!(matches!(msg.payload, IpcPayload::Text(ref t) if t == "hello"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json("{\"kind\": }").is_none());
        assert!(IpcMessage::from_json("").is_none());
    }

    #[test]
    fn rejects_missing_kind() {
        assert!(IpcMessage::from_json(r#"{"payload": "x"}"#).is_none());
    }

    #[test]
    fn dispatch_message_embeds_kind_and_payload() {
        let js = js_dispatch_message("menu_state", &serde_json::json!({"open": "solid"}));
        assert!(js.starts_with("window.backdrop.ipc._dispatch(\"menu_state\""));
        assert!(js.contains("{\"open\":\"solid\"}"));
    }

    #[test]
    fn dispatch_message_escapes_kind() {
        let js = js_dispatch_message("bad\"kind", &serde_json::Value::Null);
        // serde_json string encoding keeps the quote inside the literal
        assert!(js.contains("\"bad\\\"kind\""));
    }

    #[test]
    fn init_script_installs_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.backdrop.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch"));
    }
}
