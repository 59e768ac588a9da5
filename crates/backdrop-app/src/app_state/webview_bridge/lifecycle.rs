//! Webview event draining.

use backdrop_webview::{PageLoadState, WebViewEvent};

use crate::app_state::core::BackdropApp;

impl BackdropApp {
    /// Drain buffered webview events and dispatch them.
    ///
    /// The page announces readiness itself via the `page_ready` IPC message
    /// (sent from DOMContentLoaded), so load events are informational.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { pane_id, body } => {
                    self.handle_ipc_message(pane_id, &body);
                }
                WebViewEvent::PageLoad {
                    pane_id,
                    state,
                    url,
                } => {
                    if state == PageLoadState::Finished {
                        tracing::debug!(pane_id, url = %url, "Page load finished");
                    }
                }
                WebViewEvent::TitleChanged { pane_id, title } => {
                    if let Some(registry) = &mut self.webviews {
                        if let Some(handle) = registry.get_mut(pane_id) {
                            handle.set_title(title);
                        }
                    }
                }
                WebViewEvent::NavigationRequested { pane_id, url } => {
                    tracing::debug!(pane_id, url = %url, "WebView navigation");
                }
                WebViewEvent::Closed { pane_id } => {
                    tracing::debug!(pane_id, "WebView closed event");
                }
            }
        }
    }
}
