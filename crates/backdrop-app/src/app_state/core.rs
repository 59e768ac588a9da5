//! BackdropApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use backdrop_config::BackdropConfig;
use backdrop_webview::{ContentProvider, WebViewRegistry};

use super::background::BackgroundState;
use super::menu::MenuState;
use super::showcase::ShowcaseState;

/// Top-level application state.
pub struct BackdropApp {
    pub(super) config: BackdropConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // The page webview and its content provider
    pub(super) webviews: Option<WebViewRegistry>,
    pub(super) content: Option<Arc<ContentProvider>>,

    // Demo state machines
    pub(super) background: BackgroundState,
    pub(super) menu: MenuState,
    pub(super) showcase: ShowcaseState,

    pub(super) last_poll: Instant,
}

impl BackdropApp {
    pub fn new(config: BackdropConfig) -> Self {
        let background = BackgroundState::from_config(&config);
        Self {
            config,
            window: None,
            webviews: None,
            content: None,
            background,
            menu: MenuState::new(),
            showcase: ShowcaseState::new(),
            last_poll: Instant::now(),
        }
    }
}
