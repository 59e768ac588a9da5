//! Local content serving via custom protocol.
//!
//! Registers a `backdrop://` custom protocol so the page webview can load
//! generated assets without a local HTTP server. Generated page assets and
//! uploaded media live in an in-memory override map; anything else resolves
//! from a base directory on disk (user-supplied wallpapers referenced as
//! `backdrop://assets/...`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// Serves in-memory and on-disk assets to the page webview.
///
/// Overrides are checked first; uploaded media is registered here at
/// runtime, which is what makes an upload's *object reference* resolvable.
pub struct ContentProvider {
    /// Base directory for resolving on-disk asset paths.
    base_dir: PathBuf,
    /// In-memory assets (generated page files, uploaded media).
    overrides: Mutex<HashMap<String, (String, Vec<u8>)>>, // path -> (mime, data)
    /// Sequence for upload object references.
    media_seq: AtomicU32,
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: Mutex::new(HashMap::new()),
            media_seq: AtomicU32::new(0),
        }
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .lock()
            .unwrap()
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Register uploaded media bytes and return their object-reference URL.
    ///
    /// Each call allocates a fresh `backdrop://media/upload-<n>` URL; the
    /// bytes stay resolvable for the lifetime of the provider.
    pub fn register_media(&self, mime: impl Into<String>, data: impl Into<Vec<u8>>) -> String {
        let n = self.media_seq.fetch_add(1, Ordering::Relaxed);
        let path = format!("media/upload-{n}");
        self.add_override(&path, mime, data);
        format!("backdrop://{path}")
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(String, Vec<u8>)> {
        let clean = path.trim_start_matches('/');

        // Check overrides first
        if let Some((mime, data)) = self.overrides.lock().unwrap().get(clean) {
            return Some((mime.clone(), data.clone()));
        }

        // Resolve from filesystem
        let file_path = self.base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        // Canonicalize both paths to resolve symlinks, `..`, etc.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((mime.to_string(), data))
    }

    /// The base directory for on-disk assets.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
pub fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
