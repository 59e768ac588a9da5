//! Media type classification for uploaded files.
//!
//! Uploads are accepted as `image/*` or `video/*`; the kind decides whether
//! the file becomes a static or a live wallpaper. Anything else is ignored.

/// Broad media kind of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type string by its top-level type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim();
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Classify a file name by its extension (lowercased).
    ///
    /// Fallback for uploads whose MIME type is missing or generic.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase())?;
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => Some(MediaKind::Image),
            "mp4" | "webm" | "mov" | "mkv" | "avi" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_image_mimes() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("image/jpeg"), Some(MediaKind::Image));
        assert_eq!(
            MediaKind::from_mime(" image/webp "),
            Some(MediaKind::Image)
        );
    }

    #[test]
    fn classifies_video_mimes() {
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("video/webm"), Some(MediaKind::Video));
    }

    #[test]
    fn rejects_other_mimes() {
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime("text/html"), None);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), None);
        assert_eq!(MediaKind::from_mime(""), None);
        // Prefix match is on the full top-level type
        assert_eq!(MediaKind::from_mime("imagery/png"), None);
    }

    #[test]
    fn classifies_by_extension() {
        assert_eq!(
            MediaKind::from_file_name("sunset.JPG"),
            Some(MediaKind::Image)
        );
        assert_eq!(
            MediaKind::from_file_name("clip.final.mp4"),
            Some(MediaKind::Video)
        );
        assert_eq!(MediaKind::from_file_name("notes.txt"), None);
        assert_eq!(MediaKind::from_file_name("no-extension"), None);
    }
}
