use wry::WebView;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (evaluate JS, send IPC, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The pane ID this WebView belongs to.
    pub(super) pane_id: u32,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Current title.
    pub(super) current_title: String,
}

impl WebViewHandle {
    /// Get the pane ID.
    pub fn pane_id(&self) -> u32 {
        self.pane_id
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }
}
