//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use backdrop_webview::{ContentProvider, WebViewConfig, WebViewManager, WebViewRegistry};

use crate::page;

use super::core::BackdropApp;
use super::types::PAGE_PANE_ID;

/// URL of the generated demo page.
const PAGE_URL: &str = "backdrop://index.html";

impl BackdropApp {
    /// Create the window and the full-window page webview.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if !self.initialize_webviews(&window) {
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and page webview initialized");
        true
    }

    /// Set up the content provider, generate the page assets, and create
    /// the page webview covering the whole window.
    fn initialize_webviews(&mut self, window: &Arc<Window>) -> bool {
        // On-disk assets let config entries reference backdrop://assets/...
        let assets_dir = backdrop_platform::paths::data_dir().join("assets");
        let provider = Arc::new(ContentProvider::new(&assets_dir));

        page::register_assets(&provider, &self.config);

        let mut manager = WebViewManager::new();
        manager.set_content_provider(Arc::clone(&provider));
        let mut registry = WebViewRegistry::new(manager);

        let bounds = full_window_bounds(window);
        let config = WebViewConfig::with_url(PAGE_URL);

        if let Err(e) = registry.create(PAGE_PANE_ID, window.as_ref(), bounds, config) {
            tracing::error!(error = %e, "Failed to create page webview");
            return false;
        }

        self.webviews = Some(registry);
        self.content = Some(provider);
        tracing::info!(url = PAGE_URL, "Page webview created");
        true
    }

    /// Resize the page webview to cover the window again.
    pub(super) fn sync_webview_bounds(&self) {
        let (window, registry) = match (&self.window, &self.webviews) {
            (Some(w), Some(r)) => (w, r),
            _ => return,
        };

        if let Some(handle) = registry.get(PAGE_PANE_ID) {
            if let Err(e) = handle.set_bounds(full_window_bounds(window)) {
                tracing::warn!(error = %e, "Failed to sync page webview bounds");
            }
        }
    }
}

/// Bounds covering the window's entire inner area.
fn full_window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size();
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
