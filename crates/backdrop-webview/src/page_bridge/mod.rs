//! Rust → page bridge: generated JavaScript that mutates the visual root.
//!
//! The background controller never touches the DOM directly; it emits a
//! mutation script here and evaluates it in the page webview. Values are
//! escaped for JS string literals, and color values are validated before
//! they reach a script.

mod background;
mod sanitize;

pub use background::{apply_script, VideoOptions, VIDEO_ELEMENT_ID};
pub use sanitize::{escape_js_string, validate_css_color};
