//! Wallpaper catalog validation.

use backdrop_common::MenuCategory;

use crate::schema::{BackdropConfig, WallpaperEntry};

use super::helpers::is_css_color;

pub(crate) fn validate_wallpapers(errors: &mut Vec<String>, config: &BackdropConfig) {
    for category in [
        MenuCategory::Static,
        MenuCategory::Live,
        MenuCategory::Solid,
    ] {
        let entries = config.wallpapers.entries(category);

        if entries.is_empty() {
            errors.push(format!(
                "wallpapers.{category} must have at least one entry"
            ));
        }

        for (i, entry) in entries.iter().enumerate() {
            validate_entry(errors, category, i, entry);
        }
    }
}

fn validate_entry(
    errors: &mut Vec<String>,
    category: MenuCategory,
    index: usize,
    entry: &WallpaperEntry,
) {
    if entry.name.trim().is_empty() {
        errors.push(format!("wallpapers.{category}[{index}].name is empty"));
    }
    if entry.value.trim().is_empty() {
        errors.push(format!("wallpapers.{category}[{index}].value is empty"));
    }

    if category == MenuCategory::Solid && !entry.value.trim().is_empty() && !is_css_color(&entry.value)
    {
        errors.push(format!(
            "wallpapers.solid[{index}].value = '{}' is not a valid color",
            entry.value
        ));
    }
}
