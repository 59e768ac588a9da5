//! Startup background validation.

use backdrop_common::BackgroundMode;

use crate::schema::BackdropConfig;

use super::helpers::is_css_color;

pub(crate) fn validate_background(errors: &mut Vec<String>, config: &BackdropConfig) {
    let bg = &config.background;

    // An empty value is resolved from the catalog at startup.
    if bg.value.is_empty() {
        return;
    }

    match bg.mode {
        BackgroundMode::Solid => {
            if !is_css_color(&bg.value) {
                errors.push(format!(
                    "background.value = '{}' is not a valid color for mode 'solid'",
                    bg.value
                ));
            }
        }
        BackgroundMode::Static | BackgroundMode::Live => {
            if bg.value.trim().is_empty() {
                errors.push("background.value must not be blank".into());
            }
        }
    }
}
