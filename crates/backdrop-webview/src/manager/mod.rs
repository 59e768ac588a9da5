//! WebView lifecycle management.
//!
//! `WebViewManager` creates, tracks, and destroys `wry::WebView` instances.
//! Backdrop uses a single full-window page webview, but the manager keeps
//! the pane-id indirection so panes stay addressable by the event loop.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Manages all WebView instances.
pub struct WebViewManager {
    /// Event sink — events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `backdrop://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
