use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for webview navigation.
///
/// Only these origins are permitted. Everything else is blocked.
/// - `backdrop://` — custom protocol for generated assets and uploads
/// - `about:blank` — default empty page
/// - Unsplash / Pexels — the demo wallpaper catalog origins
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "backdrop://",
    // On Windows, WebView2 rewrites custom protocols:
    // backdrop://localhost/… → http://backdrop.localhost/…
    "http://backdrop.localhost",
    "about:blank",
    "https://images.unsplash.com/",
    "https://www.pexels.com/",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    pane_id = pid,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(pane_id = pid, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { pane_id: pid, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(pane_id = pid, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    pane_id: pid,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(pane_id = pid, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged {
                    pane_id: pid,
                    title,
                });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(
                    pane_id = pid,
                    url = %url,
                    "navigation blocked: URL not in allowlist"
                );
                return false;
            }

            debug!(pane_id = pid, url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { pane_id: pid, url });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Allowed URLs --

    #[test]
    fn allows_backdrop_protocol() {
        assert!(is_navigation_allowed("backdrop://localhost/index.html"));
        assert!(is_navigation_allowed("backdrop://media/upload-0"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn allows_wallpaper_origins() {
        assert!(is_navigation_allowed(
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920"
        ));
        assert!(is_navigation_allowed(
            "https://www.pexels.com/download/video/3051490/"
        ));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        // WebView2 on Windows rewrites backdrop://localhost/… → http://backdrop.localhost/…
        assert!(is_navigation_allowed("http://backdrop.localhost/index.html"));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_arbitrary_https() {
        assert!(!is_navigation_allowed("https://evil.com"));
        assert!(!is_navigation_allowed("https://example.com/phishing"));
        // Similar but wrong host
        assert!(!is_navigation_allowed("https://images.unsplash.com.evil.com/"));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
    }

    #[test]
    fn blocks_http_unencrypted() {
        assert!(!is_navigation_allowed("http://evil.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
    }

    #[test]
    fn blocks_javascript_protocol() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
    }

    #[test]
    fn blocks_data_protocol() {
        assert!(!is_navigation_allowed("data:text/html,<h1>XSS</h1>"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("   "));
        assert!(!is_navigation_allowed("not-a-url"));
    }

    // -- Allowlist structure --

    #[test]
    fn allowlist_has_expected_entries() {
        assert_eq!(ALLOWED_NAV_PREFIXES.len(), 5);
        assert!(ALLOWED_NAV_PREFIXES.contains(&"backdrop://"));
        assert!(ALLOWED_NAV_PREFIXES.contains(&"about:blank"));
    }
}
