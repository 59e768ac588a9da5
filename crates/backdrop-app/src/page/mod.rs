//! Generated page assets.
//!
//! The demo page is built in Rust and served through the `backdrop://`
//! content provider: markup rendered from the wallpaper catalog, the
//! component stylesheet, and the wiring script that forwards page events
//! over the IPC bridge.

mod markup;
mod script;
mod style;

use backdrop_config::BackdropConfig;
use backdrop_webview::ContentProvider;

use self::markup::render_index;

/// Register the generated page assets with the content provider.
pub fn register_assets(provider: &ContentProvider, config: &BackdropConfig) {
    provider.add_override("index.html", "text/html", render_index(config).into_bytes());
    provider.add_override("styles.css", "text/css", style::STYLESHEET.as_bytes().to_vec());
    provider.add_override(
        "app.js",
        "application/javascript",
        script::PAGE_SCRIPT.as_bytes().to_vec(),
    );
}
