//! Wallpaper catalog: the named options offered by the selection menu.

use serde::{Deserialize, Serialize};

use backdrop_common::{BackgroundMode, MenuCategory};

/// A single named wallpaper option.
///
/// The value is opaque: a CSS image reference for static entries, a media
/// URL for live entries, a color string for solid entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperEntry {
    pub name: String,
    pub value: String,
}

impl WallpaperEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The three categorized option lists shown in the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperCatalog {
    #[serde(rename = "static")]
    pub static_entries: Vec<WallpaperEntry>,
    #[serde(rename = "live")]
    pub live_entries: Vec<WallpaperEntry>,
    #[serde(rename = "solid")]
    pub solid_entries: Vec<WallpaperEntry>,
}

impl WallpaperCatalog {
    /// Entries for a menu category.
    pub fn entries(&self, category: MenuCategory) -> &[WallpaperEntry] {
        match category {
            MenuCategory::Static => &self.static_entries,
            MenuCategory::Live => &self.live_entries,
            MenuCategory::Solid => &self.solid_entries,
        }
    }

    /// Entries for the category corresponding to a background mode.
    pub fn entries_for_mode(&self, mode: BackgroundMode) -> &[WallpaperEntry] {
        match mode {
            BackgroundMode::Static => &self.static_entries,
            BackgroundMode::Live => &self.live_entries,
            BackgroundMode::Solid => &self.solid_entries,
        }
    }
}

impl Default for WallpaperCatalog {
    fn default() -> Self {
        Self {
            static_entries: vec![
                WallpaperEntry::new(
                    "Static 1",
                    "url('https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1920')",
                ),
                WallpaperEntry::new(
                    "Static 2",
                    "url('https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920')",
                ),
                WallpaperEntry::new(
                    "Static 3",
                    "url('https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=1920')",
                ),
                WallpaperEntry::new(
                    "Static 4",
                    "url('https://images.unsplash.com/photo-1501594907352-04cda38ebc29?w=1920')",
                ),
                WallpaperEntry::new(
                    "Static 5",
                    "url('https://images.unsplash.com/photo-1519681393784-d120267933ba?w=1920')",
                ),
            ],
            live_entries: vec![
                WallpaperEntry::new(
                    "Ocean Waves",
                    "https://www.pexels.com/download/video/1918465/",
                ),
                WallpaperEntry::new(
                    "Forest Nature",
                    "https://www.pexels.com/download/video/35120885/",
                ),
                WallpaperEntry::new(
                    "City Lights",
                    "https://www.pexels.com/download/video/857267/",
                ),
                WallpaperEntry::new(
                    "Mountain Clouds",
                    "https://www.pexels.com/download/video/35118365/",
                ),
                WallpaperEntry::new(
                    "Abstract Flow",
                    "https://www.pexels.com/download/video/3051490/",
                ),
            ],
            solid_entries: vec![
                WallpaperEntry::new("Blue", "#3b82f6"),
                WallpaperEntry::new("Purple", "#8b5cf6"),
                WallpaperEntry::new("Green", "#10b981"),
                WallpaperEntry::new("Red", "#ef4444"),
                WallpaperEntry::new("Orange", "#f97316"),
            ],
        }
    }
}
