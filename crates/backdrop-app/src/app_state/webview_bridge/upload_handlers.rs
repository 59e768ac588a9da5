//! File upload IPC handler.
//!
//! The page reads the selected file and posts `{name, mime, data}` with the
//! bytes base64-encoded. The MIME type decides the wallpaper mode: images
//! become static wallpapers, videos become live ones, anything else is
//! silently ignored. The bytes are registered with the content provider,
//! and the resulting `backdrop://media/...` object reference becomes the
//! background value.

use base64::Engine;

use backdrop_common::BackgroundMode;
use backdrop_platform::MediaKind;
use backdrop_webview::IpcPayload;

use crate::app_state::core::BackdropApp;

use super::extract_string_field;

impl BackdropApp {
    /// Handle `upload_file` — classify, register, and apply uploaded media.
    pub(in crate::app_state) fn handle_upload_file(&mut self, payload: &IpcPayload) {
        let name = extract_string_field(payload, "name").unwrap_or_default();
        let mime = extract_string_field(payload, "mime").unwrap_or_default();
        let data = match extract_string_field(payload, "data") {
            Some(d) => d,
            None => {
                tracing::warn!("upload_file: missing data");
                return;
            }
        };

        let kind = match classify_upload(&mime, &name) {
            Some(k) => k,
            None => {
                tracing::warn!(%name, %mime, "upload_file: unsupported type, ignoring");
                return;
            }
        };

        let bytes = match base64::engine::general_purpose::STANDARD.decode(data.as_bytes()) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(%name, error = %e, "upload_file: invalid base64 data");
                return;
            }
        };

        let content = match &self.content {
            Some(c) => c,
            None => {
                tracing::warn!("upload_file: no content provider");
                return;
            }
        };

        let url = content.register_media(&mime, bytes);
        tracing::info!(%name, %mime, %url, "Registered uploaded media");

        let (mode, value) = wallpaper_value(kind, &url);
        self.apply_background(mode, value);
    }
}

/// Decide the media kind from the MIME type, falling back to the file name.
fn classify_upload(mime: &str, name: &str) -> Option<MediaKind> {
    MediaKind::from_mime(mime).or_else(|| MediaKind::from_file_name(name))
}

/// Build the (mode, value) pair for registered upload media.
///
/// Images become a CSS image reference; videos use the raw object URL.
fn wallpaper_value(kind: MediaKind, url: &str) -> (BackgroundMode, String) {
    match kind {
        MediaKind::Image => (BackgroundMode::Static, format!("url('{url}')")),
        MediaKind::Video => (BackgroundMode::Live, url.to_string()),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_mime() {
        assert_eq!(
            classify_upload("image/png", "clip.mp4"),
            Some(MediaKind::Image)
        );
        assert_eq!(
            classify_upload("video/webm", "photo.jpg"),
            Some(MediaKind::Video)
        );
    }

    #[test]
    fn classify_falls_back_to_file_name() {
        assert_eq!(
            classify_upload("", "sunset.jpeg"),
            Some(MediaKind::Image)
        );
        assert_eq!(
            classify_upload("application/octet-stream", "clip.webm"),
            Some(MediaKind::Video)
        );
    }

    #[test]
    fn classify_rejects_other_types() {
        assert_eq!(classify_upload("application/pdf", "doc.pdf"), None);
        assert_eq!(classify_upload("", ""), None);
    }

    #[test]
    fn image_uploads_become_static_css_references() {
        let (mode, value) = wallpaper_value(MediaKind::Image, "backdrop://media/upload-0");
        assert_eq!(mode, BackgroundMode::Static);
        assert_eq!(value, "url('backdrop://media/upload-0')");
    }

    #[test]
    fn video_uploads_become_live_urls() {
        let (mode, value) = wallpaper_value(MediaKind::Video, "backdrop://media/upload-1");
        assert_eq!(mode, BackgroundMode::Live);
        assert_eq!(value, "backdrop://media/upload-1");
    }

    #[test]
    fn upload_flow_applies_background() {
        use std::sync::Arc;

        let mut app = BackdropApp::new(backdrop_config::BackdropConfig::default());
        app.content = Some(Arc::new(backdrop_webview::ContentProvider::new(
            "/nonexistent",
        )));

        let png = base64::engine::general_purpose::STANDARD.encode([0x89, b'P', b'N', b'G']);
        app.handle_upload_file(&IpcPayload::Json(serde_json::json!({
            "name": "pixel.png",
            "mime": "image/png",
            "data": png,
        })));

        assert_eq!(app.background.active().mode, BackgroundMode::Static);
        assert_eq!(
            app.background.active().value,
            "url('backdrop://media/upload-0')"
        );

        // Registered bytes stay resolvable
        let content = app.content.as_ref().unwrap();
        let (mime, data) = content.resolve("media/upload-0").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(data, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn unsupported_upload_is_ignored() {
        use std::sync::Arc;

        let mut app = BackdropApp::new(backdrop_config::BackdropConfig::default());
        app.content = Some(Arc::new(backdrop_webview::ContentProvider::new(
            "/nonexistent",
        )));
        let before = app.background.active().clone();

        let data = base64::engine::general_purpose::STANDARD.encode(b"plain");
        app.handle_upload_file(&IpcPayload::Json(serde_json::json!({
            "name": "notes.txt",
            "mime": "text/plain",
            "data": data,
        })));

        assert_eq!(app.background.active(), &before);
    }
}
