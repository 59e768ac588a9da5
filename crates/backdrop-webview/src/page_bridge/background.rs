//! Background mutation scripts.
//!
//! Each script fully replaces the prior visual representation on
//! `document.body`: exactly one of background image, background color, or
//! an injected video element is active after it runs.

use backdrop_common::{BackgroundDescriptor, BackgroundMode};

use super::sanitize::escape_js_string;

/// DOM id of the injected full-viewport video element.
pub const VIDEO_ELEMENT_ID: &str = "background-video";

/// Playback flags for the live wallpaper video element.
#[derive(Debug, Clone, Copy)]
pub struct VideoOptions {
    pub loop_video: bool,
    pub muted: bool,
    pub autoplay: bool,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            loop_video: true,
            muted: true,
            autoplay: true,
        }
    }
}

/// Generate the JS mutation applying a background descriptor to the page.
pub fn apply_script(descriptor: &BackgroundDescriptor, video: &VideoOptions) -> String {
    match descriptor.mode {
        BackgroundMode::Static => static_script(&descriptor.value),
        BackgroundMode::Live => live_script(&descriptor.value, video),
        BackgroundMode::Solid => solid_script(&descriptor.value),
    }
}

/// Snippet that removes any previously injected video element.
fn remove_video_snippet() -> String {
    format!(
        "  var old = document.getElementById('{VIDEO_ELEMENT_ID}');\n  if (old) {{ old.remove(); }}\n"
    )
}

fn static_script(value: &str) -> String {
    let value = escape_js_string(value);
    let mut js = String::from("(function() {\n");
    js.push_str(&remove_video_snippet());
    js.push_str(&format!(
        "  document.body.style.backgroundImage = '{value}';\n"
    ));
    js.push_str("  document.body.style.backgroundColor = 'transparent';\n");
    js.push_str("})();");
    js
}

fn solid_script(value: &str) -> String {
    let value = escape_js_string(value);
    let mut js = String::from("(function() {\n");
    js.push_str(&remove_video_snippet());
    js.push_str(&format!(
        "  document.body.style.backgroundColor = '{value}';\n"
    ));
    js.push_str("  document.body.style.backgroundImage = 'none';\n");
    js.push_str("})();");
    js
}

fn live_script(value: &str, video: &VideoOptions) -> String {
    let value = escape_js_string(value);
    let mut js = String::from("(function() {\n");
    js.push_str(&remove_video_snippet());
    js.push_str("  var video = document.createElement('video');\n");
    js.push_str(&format!("  video.id = '{VIDEO_ELEMENT_ID}';\n"));
    js.push_str(&format!("  video.src = '{value}';\n"));
    js.push_str(&format!("  video.autoplay = {};\n", video.autoplay));
    js.push_str(&format!("  video.loop = {};\n", video.loop_video));
    js.push_str(&format!("  video.muted = {};\n", video.muted));
    js.push_str("  video.playsInline = true;\n");
    js.push_str(
        "  video.style.cssText = 'position: fixed; top: 0; left: 0; \
         width: 100%; height: 100%; object-fit: cover; z-index: -1;';\n",
    );
    js.push_str("  document.body.appendChild(video);\n");
    if video.autoplay {
        // Autoplay restrictions reject the play() promise; that is non-fatal.
        js.push_str("  video.play().catch(function() {});\n");
    }
    js.push_str("  document.body.style.backgroundImage = 'none';\n");
    js.push_str("  document.body.style.backgroundColor = 'transparent';\n");
    js.push_str("})();");
    js
}
