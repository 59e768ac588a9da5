//! Configuration schema types for Backdrop.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the built-in demo.

mod background;
mod logging;
mod wallpapers;
mod window;

pub use background::*;
pub use logging::*;
pub use wallpapers::*;
pub use window::*;

use serde::{Deserialize, Serialize};

use backdrop_common::{BackgroundDescriptor, BackgroundMode};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Backdrop.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BackdropConfig {
    pub window: WindowConfig,
    pub background: BackgroundConfig,
    pub wallpapers: WallpaperCatalog,
    pub logging: LoggingConfig,
}

impl BackdropConfig {
    /// Resolve the startup background descriptor.
    ///
    /// An empty configured value falls back to the first catalog entry for
    /// the configured mode; an empty catalog falls back to solid black.
    pub fn startup_descriptor(&self) -> BackgroundDescriptor {
        if !self.background.value.is_empty() {
            return BackgroundDescriptor::new(self.background.mode, &self.background.value);
        }

        let entries = self.wallpapers.entries_for_mode(self.background.mode);
        match entries.first() {
            Some(entry) => BackgroundDescriptor::new(self.background.mode, &entry.value),
            None => BackgroundDescriptor::new(BackgroundMode::Solid, "#000000"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_startup_descriptor_is_live_video() {
        let config = BackdropConfig::default();
        let d = config.startup_descriptor();
        assert_eq!(d.mode, BackgroundMode::Live);
        assert_eq!(d.value, "https://www.pexels.com/download/video/3051490/");
    }

    #[test]
    fn empty_value_resolves_to_first_catalog_entry() {
        let mut config = BackdropConfig::default();
        config.background.mode = BackgroundMode::Solid;
        config.background.value = String::new();
        let d = config.startup_descriptor();
        assert_eq!(d.mode, BackgroundMode::Solid);
        assert_eq!(d.value, config.wallpapers.solid_entries[0].value);
    }

    #[test]
    fn empty_catalog_falls_back_to_solid_black() {
        let mut config = BackdropConfig::default();
        config.background.mode = BackgroundMode::Static;
        config.background.value = String::new();
        config.wallpapers.static_entries.clear();
        let d = config.startup_descriptor();
        assert_eq!(d.mode, BackgroundMode::Solid);
        assert_eq!(d.value, "#000000");
    }

    #[test]
    fn explicit_value_wins_over_catalog() {
        let mut config = BackdropConfig::default();
        config.background.mode = BackgroundMode::Solid;
        config.background.value = "#123456".into();
        let d = config.startup_descriptor();
        assert_eq!(d.value, "#123456");
    }
}
